use libsha3::sha3::{hash, hash_iterated, sum224, sum256, sum384, sum512, DIGEST_LENGTHS};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn digest_of_length(input: &[u8], mdlen: usize) -> Vec<u8> {
	match mdlen {
		28 => sum224(input).to_vec(),
		32 => sum256(input).to_vec(),
		48 => sum384(input).to_vec(),
		64 => sum512(input).to_vec(),
		_ => unreachable!(),
	}
}

#[test]
fn known_answer_vectors() {
	let fox = b"The quick brown fox jumps over the lazy dog";

	assert_eq!(
		sum256(fox).to_vec(),
		hex::decode("69070dda01975c8c120c3aada1b282394e7f032fa9cf32f4cb2259a0897dfc04").unwrap(),
	);

	// appending a single byte changes the digest completely
	assert_eq!(
		sum256(b"The quick brown fox jumps over the lazy dog.").to_vec(),
		hex::decode("a80f839cd4f83f6c3dafc87feae470045e4eb0d366397d5c6ce34ba1739f734d").unwrap(),
	);
}

#[test]
fn digest_lengths_match_request() {
	for mdlen in DIGEST_LENGTHS {
		assert_eq!(digest_of_length(b"", mdlen).len(), mdlen);
		assert_eq!(hash(b"", mdlen).unwrap().len(), mdlen);
		assert_eq!(hash_iterated(b"", mdlen, 5).unwrap().len(), mdlen);
	}
}

#[test]
fn repeated_calls_are_deterministic() {
	let mut rng = StdRng::seed_from_u64(1);

	for _ in 0 .. 32 {
		let len = rng.gen_range(0 .. 500);
		let input: Vec<u8> = (0 .. len).map(|_| rng.gen()).collect();

		for mdlen in DIGEST_LENGTHS {
			assert_eq!(digest_of_length(&input, mdlen), digest_of_length(&input, mdlen));
			assert_eq!(hash(&input, mdlen), hash(&input, mdlen));
		}
	}
}

// messages one byte short of a rate block, exactly one block, and one
// byte over must all take different paths through the padding logic and
// still produce distinct digests
#[test]
fn padding_block_boundaries() {
	for mdlen in DIGEST_LENGTHS {
		let rate = 200 - 2 * mdlen;

		let short = vec![0x61; rate - 1];
		let exact = vec![0x61; rate];
		let long = vec![0x61; rate + 1];

		let digests = [
			digest_of_length(&short, mdlen),
			digest_of_length(&exact, mdlen),
			digest_of_length(&long, mdlen),
		];

		for digest in &digests {
			assert_eq!(digest.len(), mdlen);
		}

		assert_ne!(digests[0], digests[1]);
		assert_ne!(digests[0], digests[2]);
		assert_ne!(digests[1], digests[2]);
	}
}

#[test]
fn iterated_hash_agrees_with_manual_rehashing() {
	for mdlen in DIGEST_LENGTHS {
		let plain = hash(b"stretch me", mdlen).unwrap();

		assert_eq!(hash_iterated(b"stretch me", mdlen, 1).unwrap(), plain);

		let mut expected = plain.as_bytes().to_vec();

		for iterations in 2 .. 6 {
			expected = digest_of_length(&expected, mdlen);

			assert_eq!(
				hash_iterated(b"stretch me", mdlen, iterations).unwrap().as_bytes(),
				expected,
			);
		}
	}
}

// flipping one input bit should flip roughly half the output bits; with
// 200 trials of a 256-bit digest the mean stays well inside 128 +/- 16
#[test]
fn single_bit_avalanche() {
	let mut rng = StdRng::seed_from_u64(2);

	let trials = 200;
	let mut flipped_bits_total = 0u32;

	for _ in 0 .. trials {
		let mut input = [0u8; 64];
		rng.fill(&mut input);

		let baseline = sum256(&input);

		let bit = rng.gen_range(0 .. input.len() * 8);
		input[bit / 8] ^= 1 << (bit % 8);

		let flipped = sum256(&input);

		for (a, b) in baseline.iter().zip(flipped.iter()) {
			flipped_bits_total += (a ^ b).count_ones();
		}
	}

	assert!(flipped_bits_total > 112 * trials);
	assert!(flipped_bits_total < 144 * trials);
}
