//! An implementation of [SHA-3](https://en.wikipedia.org/wiki/SHA-3).

use core::fmt;

use crate::sponge::sponge;

/// The digest lengths, in bytes, accepted by [`hash`] and
/// [`hash_iterated`]: 224, 256, 384, and 512 bits.
pub const DIGEST_LENGTHS: [usize; 4] = [28, 32, 48, 64];

/// Error returned by the variable-length entry points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
	/// The requested digest length is not one of [`DIGEST_LENGTHS`].
	/// Other lengths would produce a rate that is meaningless or larger
	/// than the state itself.
	InvalidDigestLength(usize),
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Error::InvalidDigestLength(mdlen) => {
				write!(f, "invalid digest length {} (expected 28, 32, 48, or 64 bytes)", mdlen)
			}
		}
	}
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// A digest returned by [`hash`] or [`hash_iterated`]: between 28 and
/// 64 bytes, backed by a fixed array.
#[derive(Clone, Copy)]
pub struct Digest {
	bytes: [u8; 64],
	len: usize,
}

impl Digest {
	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes[.. self.len]
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}
}

impl AsRef<[u8]> for Digest {
	fn as_ref(&self) -> &[u8] {
		self.as_bytes()
	}
}

impl PartialEq for Digest {
	fn eq(&self, other: &Self) -> bool {
		self.as_bytes() == other.as_bytes()
	}
}

impl Eq for Digest {}

impl fmt::Display for Digest {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		for byte in self.as_bytes() {
			write!(f, "{:02x}", byte)?;
		}

		Ok(())
	}
}

impl fmt::Debug for Digest {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "Digest({})", self)
	}
}

/// Returns the SHA-3 digest of `input`, `mdlen` bytes long. `mdlen`
/// must be one of [`DIGEST_LENGTHS`].
pub fn hash(input: &[u8], mdlen: usize) -> Result<Digest, Error> {
	if !DIGEST_LENGTHS.contains(&mdlen) {
		return Err(Error::InvalidDigestLength(mdlen));
	}

	let mut digest = Digest {bytes: [0; 64], len: mdlen};
	sponge(input, &mut digest.bytes[.. mdlen]);

	Ok(digest)
}

/// Like [`hash`], but re-hashes the digest itself `iterations - 1`
/// additional times, each pass hashing the previous pass's digest
/// rather than the original input. An iteration count of zero or one
/// is a single ordinary hash.
///
/// This stretching mode is not part of the SHA-3 standard; the first
/// pass of every call is a standard SHA-3 digest.
pub fn hash_iterated(input: &[u8], mdlen: usize, iterations: u32) -> Result<Digest, Error> {
	let mut digest = hash(input, mdlen)?;

	for _ in 1 .. iterations {
		let previous = digest;
		sponge(previous.as_bytes(), &mut digest.bytes[.. mdlen]);
	}

	Ok(digest)
}

/// Returns the SHA3-224 digest of the byte slice passed to it.
pub fn sum224(bytes: &[u8]) -> [u8; 28] {
	let mut out = [0; 28];
	sponge(bytes, &mut out);
	out
}

/// Returns the SHA3-256 digest of the byte slice passed to it.
pub fn sum256(bytes: &[u8]) -> [u8; 32] {
	let mut out = [0; 32];
	sponge(bytes, &mut out);
	out
}

/// Returns the SHA3-384 digest of the byte slice passed to it.
pub fn sum384(bytes: &[u8]) -> [u8; 48] {
	let mut out = [0; 48];
	sponge(bytes, &mut out);
	out
}

/// Returns the SHA3-512 digest of the byte slice passed to it.
pub fn sum512(bytes: &[u8]) -> [u8; 64] {
	let mut out = [0; 64];
	sponge(bytes, &mut out);
	out
}

#[cfg(test)]
fn format_hash<I: AsRef<[u8]>>(
	hasher: impl FnOnce(&[u8]) -> I,
	input: &[u8],
) -> String {
	use std::fmt::Write;

	let mut out = String::new();

	for &byte in hasher(input).as_ref() {
		write!(out, "{:>02x}", byte).unwrap();
	}

	out
}

#[test]
fn test_empty_inputs() {
	assert_eq!(
		format_hash(sum224, b""),
		"6b4e03423667dbb73b6e15454f0eb1abd4597f9a1b078e3f5b5a6bc7",
	);

	assert_eq!(
		format_hash(sum256, b""),
		"a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
	);

	assert_eq!(
		format_hash(sum384, b""),
		"0c63a75b845e4f7d01107d852e4c2485c51a50aaaa94fc61995e71bbee983a2ac3713831264adb47fb6bd1e058d5f004",
	);

	assert_eq!(
		format_hash(sum512, b""),
		"a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a615b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26",
	);
}

#[test]
fn test_abc_inputs() {
	assert_eq!(
		format_hash(sum224, b"abc"),
		"e642824c3f8cf24ad09234ee7d3c766fc9a3a5168d0c94ad73b46fdf",
	);

	assert_eq!(
		format_hash(sum256, b"abc"),
		"3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532",
	);

	assert_eq!(
		format_hash(sum384, b"abc"),
		"ec01498288516fc926459f58e2c6ad8df9b473cb0fc08c2596da7cf0e49be4b298d88cea927ac7f539f1edf228376d25",
	);

	assert_eq!(
		format_hash(sum512, b"abc"),
		"b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0",
	);
}

// a million 'a' bytes spans many rate blocks for every digest length,
// exercising the repeated absorb-then-permute loop
#[test]
fn test_multi_block_input() {
	let input = vec![b'a'; 1_000_000];

	assert_eq!(
		format_hash(sum256, &input),
		"5c8875ae474a3634ba4fd55ec85bffd661f32aca75c6d699d0cdcb6c115891c1",
	);

	assert_eq!(
		format_hash(sum512, &input),
		"3c3a876da14034ab60627c077bb98f7e120a2a5370212dffb3385a18d4f38859ed311d0a9d5141ce9cc5c66ee689b266a8aa18ace8282a0e0db596c90b0a7b87",
	);
}

#[test]
fn test_hash_matches_sums() {
	let input = b"the byte slice passed to every entry point";

	assert_eq!(hash(input, 28).unwrap().as_bytes(), sum224(input));
	assert_eq!(hash(input, 32).unwrap().as_bytes(), sum256(input));
	assert_eq!(hash(input, 48).unwrap().as_bytes(), sum384(input));
	assert_eq!(hash(input, 64).unwrap().as_bytes(), sum512(input));
}

#[test]
fn test_invalid_digest_lengths() {
	for mdlen in [0, 1, 27, 33, 63, 65, 100, 200] {
		assert_eq!(hash(b"input", mdlen), Err(Error::InvalidDigestLength(mdlen)));
		assert_eq!(hash_iterated(b"input", mdlen, 3), Err(Error::InvalidDigestLength(mdlen)));
	}
}

#[test]
fn test_single_iteration_matches_plain_hash() {
	for mdlen in DIGEST_LENGTHS {
		let plain = hash(b"input", mdlen).unwrap();

		assert_eq!(hash_iterated(b"input", mdlen, 0).unwrap(), plain);
		assert_eq!(hash_iterated(b"input", mdlen, 1).unwrap(), plain);
	}
}

#[test]
fn test_iteration_rehashes_previous_digest() {
	let twice = hash_iterated(b"input", 32, 2).unwrap();

	assert_eq!(twice.as_bytes(), sum256(&sum256(b"input")));

	let thrice = hash_iterated(b"input", 32, 3).unwrap();

	assert_eq!(thrice.as_bytes(), sum256(&sum256(&sum256(b"input"))));
}

#[test]
fn test_digest_formatting() {
	let digest = hash(b"", 32).unwrap();

	assert_eq!(digest.len(), 32);
	assert!(!digest.is_empty());
	assert_eq!(
		digest.to_string(),
		"a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
	);
}
