//! The absorb/pad/squeeze halves of the sponge construction.

use crate::{keccakf, KECCAK_ROUNDS};

/// Total width of the state in bytes: rate plus capacity.
pub const STATE_BYTES: usize = 200;

/// The largest rate across the supported digest lengths. SHA3-224 holds
/// back the least capacity, so its blocks are the biggest; the padding
/// scratch buffer must be sized for it.
pub const MAX_RATE: usize = STATE_BYTES - 2 * 28;

/// Rate in bytes for a digest of `mdlen` bytes: whatever the capacity
/// (twice the digest length) leaves over.
pub const fn rate_for(mdlen: usize) -> usize {
	STATE_BYTES - 2 * mdlen
}

fn absorb_block(state: &mut [u64; 25], block: &[u8]) {
	for (lane, bytes) in state.iter_mut().zip(block.chunks_exact(8)) {
		*lane ^= u64::from_le_bytes(bytes.try_into().unwrap());
	}

	keccakf(state, KECCAK_ROUNDS);
}

fn squeeze(state: &[u64; 25], digest: &mut [u8]) {
	for (chunk, lane) in digest.chunks_mut(8).zip(state.iter()) {
		chunk.copy_from_slice(&lane.to_le_bytes()[.. chunk.len()]);
	}
}

/// Hashes `input` into `digest`, whose length selects the rate. The
/// length must be one of the supported digest sizes; [`crate::sha3`]
/// checks that before calling in here.
pub fn sponge(input: &[u8], digest: &mut [u8]) {
	let rate = rate_for(digest.len());

	let mut state = [0; 25];

	let mut blocks = input.chunks_exact(rate);

	for block in blocks.by_ref() {
		absorb_block(&mut state, block);
	}

	// an input that fills its blocks exactly still gets a final block
	// holding nothing but padding
	let tail = blocks.remainder();

	let mut last = [0; MAX_RATE];
	last[.. tail.len()].copy_from_slice(tail);
	last[tail.len()] = 0x06;
	last[rate - 1] |= 0x80;

	absorb_block(&mut state, &last[.. rate]);

	squeeze(&state, digest);
}

#[test]
fn test_rates_are_whole_lanes() {
	for mdlen in [28, 32, 48, 64] {
		assert_eq!(rate_for(mdlen) % 8, 0);
	}

	assert_eq!(rate_for(28), MAX_RATE);
}
