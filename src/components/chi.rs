pub fn chi(state: &mut [u64; 25]) {
	for row in state.chunks_exact_mut(5) {
		let mut old_row = [0; 5];
		old_row.copy_from_slice(row);

		for x in 0 .. 5 {
			let xp1 = (x + 1) % 5;
			let xp2 = (x + 2) % 5;

			row[x] ^= !old_row[xp1] & old_row[xp2];
		}
	}
}
