use std::cmp::Ordering;

use crate::palettes::palette::{Color, Palette, dedup_colors};

fn compare_hue_saturation(a: &Color, b: &Color) -> Ordering {
	let a = a.to_hls();
	let b = b.to_hls();
	a.h.total_cmp(&b.h).then(a.s.total_cmp(&b.s))
}

pub fn sort_by_hue_saturation(colors: &[Color]) -> Vec<Color> {
	let mut sorted = dedup_colors(colors);
	// stable: equal hue and saturation keep their input order
	sorted.sort_by(compare_hue_saturation);
	sorted
}

pub fn sort_rows(palette: &mut Palette) {
	for row in 0..palette.rows() {
		let sorted = sort_by_hue_saturation(palette.row(row));
		// rows that lost duplicates get black at the end
		for col in 0..palette.cols() {
			palette.set(row, col, sorted.get(col).copied().unwrap_or(Color::BLACK));
		}
	}
}
