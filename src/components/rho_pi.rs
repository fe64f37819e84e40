use crate::round_constants::{PI_INDICES, ROTATION_OFFSETS};

// rho and pi applied as one pass: walking the pi lane cycle with a single
// rolling temporary, rotating each lane as it is relocated
pub fn rho_pi(state: &mut [u64; 25]) {
	let mut carried = state[1];

	for i in 0 .. 24 {
		let dest = PI_INDICES[i];

		let displaced = state[dest];
		state[dest] = carried.rotate_left(ROTATION_OFFSETS[i]);
		carried = displaced;
	}
}
