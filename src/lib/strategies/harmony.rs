//! Hue-based strategies. Each picks one base hue per column, then walks down the rows
//! varying saturation and value while the hue drifts by the row offsets.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::palettes::color_space::{Hsv, wrap_hue};
use crate::palettes::grid::GridSize;
use crate::palettes::palette::Palette;

pub struct RowOffsets<'a> {
	auto: &'a [f64],
	user: &'a [f64],
}

impl<'a> RowOffsets<'a> {
	pub fn new(auto: &'a [f64], user: &'a [f64]) -> Self {
		Self { auto, user }
	}

	fn auto(&self, row: usize) -> f64 {
		self.auto.get(row).copied().unwrap_or_default()
	}

	pub fn user(&self, row: usize) -> f64 {
		self.user.get(row).copied().unwrap_or_default()
	}

	pub fn shift(&self, hue: f64, row: usize) -> f64 {
		wrap_hue(hue + self.auto(row) + self.user(row))
	}

	pub fn shift_half(&self, hue: f64, row: usize) -> f64 {
		wrap_hue(hue + self.auto(row) * 0.5 + self.user(row))
	}
}

fn fill_columns<R, F>(size: GridSize, rng: &mut R, mut cell: F) -> Palette
where
	R: Rng + ?Sized,
	F: FnMut(usize, usize, &mut R) -> Hsv,
{
	let mut palette = Palette::new(size);
	for col in 0..size.cols {
		for row in 0..size.rows {
			let hsv = cell(row, col, rng);
			palette.set(row, col, hsv.to_color());
		}
	}

	palette
}

fn ramp(start: f64, span: f64, row: usize, rows: usize) -> f64 {
	start + row as f64 * (span / rows as f64)
}

fn replicate(mut hues: Vec<f64>, cols: usize) -> Vec<f64> {
	if hues.is_empty() {
		return vec![0.0; cols];
	}

	while hues.len() < cols {
		hues.extend_from_within(..);
	}
	hues.truncate(cols);
	hues
}

fn random_hues<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<f64> {
	(0..count).map(|_| rng.random::<f64>()).collect()
}

pub fn distinct_hues<R: Rng + ?Sized>(size: GridSize, offsets: &RowOffsets, rng: &mut R) -> Palette {
	let cols = size.cols;
	let mut hues = (0..cols)
		.map(|i| wrap_hue(i as f64 / cols as f64 + rng.random::<f64>() * 0.03))
		.collect::<Vec<f64>>();
	hues.shuffle(rng);

	fill_columns(size, rng, |row, col, rng| {
		Hsv::new(
			offsets.shift(hues[col], row),
			ramp(0.3, 0.6, row, size.rows) + rng.random::<f64>() * 0.15,
			ramp(0.9, -0.5, row, size.rows) + rng.random::<f64>() * 0.1,
		)
	})
}

pub fn split_complementary<R: Rng + ?Sized>(size: GridSize, offsets: &RowOffsets, rng: &mut R) -> Palette {
	let base = rng.random::<f64>();
	let comp1 = wrap_hue(base + 0.5 - 0.05);
	let comp2 = wrap_hue(base + 0.5 + 0.05);

	let mut hues = vec![base; size.cols / 4 + 2];
	hues.extend([
		wrap_hue(base + 0.02),
		wrap_hue(base - 0.02),
		comp1,
		wrap_hue(comp1 + 0.03),
		comp2,
		wrap_hue(comp2 - 0.03),
		wrap_hue(comp1 - 0.03),
		wrap_hue(comp2 + 0.03),
		base,
		comp1,
		comp2,
	]);
	let mut hues = replicate(hues, size.cols);
	hues.shuffle(rng);

	fill_columns(size, rng, |row, col, rng| {
		Hsv::new(
			offsets.shift(hues[col], row),
			ramp(0.4, 0.5, row, size.rows) + rng.random::<f64>() * 0.1,
			ramp(0.9, -0.5, row, size.rows) + rng.random::<f64>() * 0.1,
		)
	})
}

pub fn triadic_variations<R: Rng + ?Sized>(size: GridSize, offsets: &RowOffsets, rng: &mut R) -> Palette {
	let hue1 = rng.random::<f64>();
	let hue2 = wrap_hue(hue1 + 0.33);
	let hue3 = wrap_hue(hue1 + 0.66);

	let hues = [hue1, hue2, hue3].iter()
		.flat_map(|&h| [h, h + 0.02, h - 0.02, h + 0.04, h - 0.04])
		.map(wrap_hue)
		.collect::<Vec<f64>>();
	let mut hues = replicate(hues, size.cols);
	hues.shuffle(rng);

	fill_columns(size, rng, |row, col, rng| {
		Hsv::new(
			offsets.shift(hues[col], row),
			ramp(0.4, 0.5, row, size.rows) + rng.random::<f64>() * 0.2,
			ramp(0.9, -0.5, row, size.rows) + rng.random::<f64>() * 0.1,
		)
	})
}

pub fn analogous_extended<R: Rng + ?Sized>(size: GridSize, offsets: &RowOffsets, rng: &mut R) -> Palette {
	const HUE_RANGE: f64 = 0.4;
	let start = rng.random::<f64>();

	fill_columns(size, rng, |row, col, rng| {
		let hue = wrap_hue(start + (col as f64 / size.cols as f64) * HUE_RANGE);
		Hsv::new(
			offsets.shift(hue, row),
			ramp(0.5, 0.4, row, size.rows) + rng.random::<f64>() * 0.2,
			ramp(0.9, -0.5, row, size.rows) + rng.random::<f64>() * 0.1,
		)
	})
}

pub fn monochromatic_columns<R: Rng + ?Sized>(size: GridSize, offsets: &RowOffsets, rng: &mut R) -> Palette {
	let mut hue = 0.0;

	fill_columns(size, rng, |row, _, rng| {
		if row == 0 {
			hue = rng.random::<f64>();
		}

		Hsv::new(
			offsets.shift(hue, row),
			ramp(0.3, 0.6, row, size.rows) + rng.random::<f64>() * 0.1,
			ramp(0.95, -0.6, row, size.rows) + rng.random::<f64>() * 0.1,
		)
	})
}

pub fn warm_cool_contrast<R: Rng + ?Sized>(size: GridSize, offsets: &RowOffsets, rng: &mut R) -> Palette {
	let warm_count = (size.cols / 2 + 1).min(size.cols);
	let cool_count = size.cols - warm_count;

	// warm hues span magenta-red through orange, wrapping past 1.0
	let mut hues = (0..warm_count)
		.map(|_| wrap_hue(rng.random_range(0.95..1.15)))
		.collect::<Vec<f64>>();
	hues.extend((0..cool_count).map(|_| rng.random_range(0.4..0.7)));
	hues.shuffle(rng);

	fill_columns(size, rng, |row, col, rng| {
		Hsv::new(
			offsets.shift(hues[col], row),
			ramp(0.5, 0.4, row, size.rows) + rng.random::<f64>() * 0.1,
			ramp(0.9, -0.5, row, size.rows) + rng.random::<f64>() * 0.1,
		)
	})
}

pub fn pastel_dark_contrast<R: Rng + ?Sized>(size: GridSize, offsets: &RowOffsets, rng: &mut R) -> Palette {
	let hues = random_hues(size.cols, rng);
	let pastel_rows = size.rows / 2;

	fill_columns(size, rng, |row, col, rng| {
		let hue = offsets.shift(hues[col], row);
		if row < pastel_rows {
			Hsv::new(hue, 0.2 + rng.random::<f64>() * 0.2, 0.9 + rng.random::<f64>() * 0.1)
		} else {
			Hsv::new(hue, 0.7 + rng.random::<f64>() * 0.2, 0.4 + rng.random::<f64>() * 0.2)
		}
	})
}

pub fn random_with_harmony<R: Rng + ?Sized>(size: GridSize, offsets: &RowOffsets, rng: &mut R) -> Palette {
	let mut hue = 0.0;

	fill_columns(size, rng, |row, _, rng| {
		if row == 0 {
			hue = rng.random::<f64>();
		}

		// lighter at the top, deeper towards the fourth row
		let (s, v) = match row {
			0 => (rng.random_range(0.2..0.5), rng.random_range(0.85..1.0)),
			1 => (rng.random_range(0.4..0.7), rng.random_range(0.7..0.9)),
			2 => (rng.random_range(0.6..0.9), rng.random_range(0.55..0.75)),
			3 => (rng.random_range(0.8..1.0), rng.random_range(0.4..0.6)),
			_ => (rng.random_range(0.5..0.8), rng.random_range(0.6..0.8)),
		};

		Hsv::new(offsets.shift(hue, row), s, v)
	})
}

pub fn complementary<R: Rng + ?Sized>(size: GridSize, offsets: &RowOffsets, rng: &mut R) -> Palette {
	let base = rng.random::<f64>();
	let complement = wrap_hue(base + 0.5);

	let mut hues = vec![base; size.cols / 2];
	hues.resize(size.cols, complement);
	hues.shuffle(rng);

	fill_columns(size, rng, |row, col, rng| {
		Hsv::new(
			offsets.shift(hues[col], row),
			ramp(0.4, 0.5, row, size.rows) + rng.random::<f64>() * 0.1,
			ramp(0.85, -0.5, row, size.rows) + rng.random::<f64>() * 0.1,
		)
	})
}

pub fn shades_of_gray<R: Rng + ?Sized>(size: GridSize, offsets: &RowOffsets, rng: &mut R) -> Palette {
	// a barely visible tint keeps the grays from looking flat
	let tint = rng.random::<f64>();

	fill_columns(size, rng, |row, col, rng| {
		let value = 0.15
			+ (col as f64 / size.cols as f64) * 0.7
			+ (row as f64 / size.rows as f64) * 0.15;
		Hsv::new(offsets.shift_half(tint, row), 0.03 + rng.random::<f64>() * 0.03, value)
	})
}

pub fn tetradic<R: Rng + ?Sized>(size: GridSize, offsets: &RowOffsets, rng: &mut R) -> Palette {
	let base = rng.random::<f64>();
	let quarter = size.cols / 4;

	let mut hues = vec![base; quarter + 1];
	hues.extend(std::iter::repeat_n(wrap_hue(base + 0.25), quarter));
	hues.extend(std::iter::repeat_n(wrap_hue(base + 0.5), quarter));
	hues.extend(std::iter::repeat_n(wrap_hue(base + 0.75), size.cols.saturating_sub(3 * (quarter + 1))));
	let mut hues = replicate(hues, size.cols);
	hues.shuffle(rng);

	fill_columns(size, rng, |row, col, rng| {
		Hsv::new(
			offsets.shift(hues[col], row),
			ramp(0.4, 0.5, row, size.rows) + rng.random::<f64>() * 0.1,
			ramp(0.85, -0.5, row, size.rows) + rng.random::<f64>() * 0.1,
		)
	})
}

/// The only deterministic strategy: a plain rainbow across the columns that loses
/// saturation row by row. Only the user hue shift applies.
pub fn rainbow_desaturated_rows(size: GridSize, offsets: &RowOffsets) -> Palette {
	let mut palette = Palette::new(size);
	for col in 0..size.cols {
		let hue = col as f64 / size.cols as f64;
		for row in 0..size.rows {
			let hsv = Hsv::new(
				wrap_hue(hue + offsets.user(row)),
				1.0 - ramp(0.0, 0.6, row, size.rows),
				0.9,
			);
			palette.set(row, col, hsv.to_color());
		}
	}

	palette
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn replicate_repeats_and_truncates() {
		assert_eq!(replicate(vec![0.1, 0.2], 5), vec![0.1, 0.2, 0.1, 0.2, 0.1]);
		assert_eq!(replicate(vec![0.1, 0.2, 0.3], 2), vec![0.1, 0.2]);
	}

	#[test]
	fn offsets_default_to_zero_past_the_end() {
		let offsets = RowOffsets::new(&[0.0, 0.1], &[0.5]);
		assert_eq!(offsets.shift(0.2, 3), 0.2);
		assert!((offsets.shift(0.6, 1) - 0.7).abs() < 1e-12);
		assert!((offsets.shift(0.2, 0) - 0.7).abs() < 1e-12);
	}

	#[test]
	fn rainbow_first_column_is_red() {
		let offsets = RowOffsets::new(&[], &[]);
		let palette = rainbow_desaturated_rows(GridSize::TWISTER, &offsets);
		let first = palette.get(0, 0);
		assert_eq!(first.g, first.b);
		assert!(first.r > first.g);
	}
}
