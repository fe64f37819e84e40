use crate::round_constants::ROUND_CONSTANTS;

pub fn iota(state: &mut [u64; 25], round: usize) {
	state[0] ^= ROUND_CONSTANTS[round];
}
