pub fn theta(state: &mut [u64; 25]) {
	let mut parities = [0; 5];

	for x in 0 .. 5 {
		for y in 0 .. 5 {
			parities[x] ^= state[x + 5 * y];
		}
	}

	for x in 0 .. 5 {
		let xm1 = (x + 4) % 5;
		let xp1 = (x + 1) % 5;

		let correction = parities[xm1] ^ parities[xp1].rotate_left(1);

		for y in 0 .. 5 {
			state[x + 5 * y] ^= correction;
		}
	}
}
