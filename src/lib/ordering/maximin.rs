use rand::Rng;

use crate::palettes::palette::{Color, dedup_colors};

/// Greedy farthest-point selection of up to `count` distinct colors.
pub fn select_distinct<R: Rng + ?Sized>(candidates: &[Color], count: usize, rng: &mut R) -> Vec<Color> {
	let mut remaining = dedup_colors(candidates);
	if remaining.is_empty() || count == 0 {
		return Vec::new();
	}

	let mut selected = Vec::with_capacity(count.min(remaining.len()));
	let first = remaining.remove(rng.random_range(0..remaining.len()));
	selected.push(first);

	// smallest squared distance of each remaining candidate to the selection so far
	let mut min_dist = remaining.iter().map(|c| c.distance_squared(&first)).collect::<Vec<u32>>();

	while selected.len() < count && !remaining.is_empty() {
		let mut best = 0;
		for (i, d) in min_dist.iter().enumerate() {
			// strict, so the earliest candidate wins ties
			if *d > min_dist[best] {
				best = i;
			}
		}

		let picked = remaining.remove(best);
		min_dist.remove(best);
		selected.push(picked);

		for (c, d) in remaining.iter().zip(min_dist.iter_mut()) {
			*d = (*d).min(c.distance_squared(&picked));
		}
	}

	selected
}
