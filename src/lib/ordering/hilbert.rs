//! Ordering colors along a 2D Hilbert curve laid over the CIE 1976 u'v' chromaticity plane,
//! so that neighbours in the output are neighbours in hue.

use crate::palettes::palette::{Color, dedup_colors};

pub const DEFAULT_HILBERT_ORDER: u32 = 10;
pub const MAX_HILBERT_ORDER: u32 = 16;

const D65_XY: (f64, f64) = (0.3127, 0.3290);

const SRGB_TO_XYZ: [[f64; 3]; 3] = [
	[0.4124564, 0.3575761, 0.1804375],
	[0.2126729, 0.7151522, 0.0721750],
	[0.0193339, 0.1191920, 0.9503041],
];

fn srgb_to_linear(c: u8) -> f64 {
	let c = c as f64 / 255.0;
	if c <= 0.04045 {
		c / 12.92
	} else {
		((c + 0.055) / 1.055).powf(2.4)
	}
}

pub fn chromaticity_xy(c: Color) -> (f64, f64) {
	let rgb = [srgb_to_linear(c.r), srgb_to_linear(c.g), srgb_to_linear(c.b)];
	let [x, y, z] = SRGB_TO_XYZ.map(|m| m[0] * rgb[0] + m[1] * rgb[1] + m[2] * rgb[2]);

	let sum = x + y + z;
	if sum <= 0.0 {
		return D65_XY;
	}

	(x / sum, y / sum)
}

pub fn chromaticity_uv(c: Color) -> (f64, f64) {
	let (x, y) = chromaticity_xy(c);
	let denom = -2.0 * x + 12.0 * y + 3.0;
	(4.0 * x / denom, 9.0 * y / denom)
}

fn quantize(w: f64, order: u32) -> u32 {
	let max = ((1u64 << order) - 1) as f64;
	((w * 0.5 + 0.5) * max).floor().clamp(0.0, max) as u32
}

/// Distance of grid point `p` along a Hilbert curve of the given order
/// (bits per axis, `1..=16`). The result is below `2^(2 * order)`.
///
/// Uses Skilling's transpose algorithm; the first axis carries the more significant bit.
pub fn hilbert_distance(p: [u32; 2], order: u32) -> u64 {
	let order = order.clamp(1, MAX_HILBERT_ORDER);
	let mask = ((1u64 << order) - 1) as u32;
	let mut x = [p[0] & mask, p[1] & mask];
	let m = 1u32 << (order - 1);

	// inverse undo excess work
	let mut q = m;
	while q > 1 {
		let pm = q - 1;
		for i in 0..2 {
			if x[i] & q != 0 {
				x[0] ^= pm;
			} else {
				let t = (x[0] ^ x[i]) & pm;
				x[0] ^= t;
				x[i] ^= t;
			}
		}
		q >>= 1;
	}

	// gray encode
	x[1] ^= x[0];
	let mut t = 0;
	let mut q = m;
	while q > 1 {
		if x[1] & q != 0 {
			t ^= q - 1;
		}
		q >>= 1;
	}
	x[0] ^= t;
	x[1] ^= t;

	let mut h = 0u64;
	for bit in (0..order).rev() {
		h = (h << 1) | ((x[0] >> bit) & 1) as u64;
		h = (h << 1) | ((x[1] >> bit) & 1) as u64;
	}

	h
}

pub fn hilbert_index(c: Color, order: u32) -> u64 {
	let order = order.clamp(1, MAX_HILBERT_ORDER);
	let (u, v) = chromaticity_uv(c);
	hilbert_distance([quantize(u, order), quantize(v, order)], order)
}

pub fn sort_by_hilbert(colors: &[Color], order: u32) -> Vec<Color> {
	let mut sorted = dedup_colors(colors);
	sorted.sort_by_cached_key(|c| hilbert_index(*c, order));
	sorted
}
