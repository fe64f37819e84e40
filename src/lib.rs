#![cfg_attr(not(feature = "std"), no_std)]

// to prevent broken links when building documentation in #![no_std] mode
#[cfg(all(not(feature = "std"), doc))]
extern crate std;

mod round_constants;
mod sponge;

mod components {
	pub mod chi;
	pub mod iota;
	pub mod rho_pi;
	pub mod theta;
}

use components::chi::chi;
use components::iota::iota;
use components::rho_pi::rho_pi;
use components::theta::theta;

pub mod sha3;

/// Number of rounds in the standard Keccak-f[1600] permutation.
pub const KECCAK_ROUNDS: usize = 24;

/// Applies `rounds` rounds of the Keccak-f[1600] permutation to the
/// 25-lane state. `rounds` must be at most [`KECCAK_ROUNDS`], since the
/// iota step indexes the 24-entry round-constant table.
pub fn keccakf(state: &mut [u64; 25], rounds: usize) {
	for round in 0 .. rounds {
		theta(state);
		rho_pi(state);
		chi(state);
		iota(state, round);
	}
}

// the first lanes of Keccak-f[1600] applied to the all-zero state, from
// the reference KeccakCodePackage test vectors
#[test]
fn test_permute_all_zero_state() {
	let mut state = [0; 25];

	keccakf(&mut state, KECCAK_ROUNDS);

	assert_eq!(state[0], 0xf1258f7940e1dde7);
	assert_eq!(state[1], 0x84d5ccf933c0478a);
	assert_eq!(state[2], 0xd598261ea65aa9ee);
	assert_eq!(state[24], 0xeaf1ff7b5ceca249);
}

#[test]
fn test_zero_rounds_is_identity() {
	let mut state = [0x0123456789abcdef; 25];

	keccakf(&mut state, 0);

	assert_eq!(state, [0x0123456789abcdef; 25]);
}
