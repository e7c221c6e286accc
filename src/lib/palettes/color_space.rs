//! Cylindrical color models used by the generators and the hue sort.

use crate::palettes::palette::Color;

#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Hsv {
	pub h: f64,
	pub s: f64,
	pub v: f64,
}

#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Hls {
	pub h: f64,
	pub l: f64,
	pub s: f64,
}

pub fn wrap_hue(h: f64) -> f64 {
	let h = h.rem_euclid(1.0);
	// rem_euclid can round tiny negative values up to exactly 1.0
	if h >= 1.0 { 0.0 } else { h }
}

fn channel_to_u8(c: f64) -> u8 {
	// truncation, not rounding
	(c * 255.0) as u8
}

fn hue_from_rgb(r: f64, g: f64, b: f64, maxc: f64, minc: f64) -> f64 {
	let range = maxc - minc;
	let rc = (maxc - r) / range;
	let gc = (maxc - g) / range;
	let bc = (maxc - b) / range;

	let h = if r == maxc {
		bc - gc
	} else if g == maxc {
		2.0 + rc - bc
	} else {
		4.0 + gc - rc
	};

	wrap_hue(h / 6.0)
}

fn normalized(c: Color) -> (f64, f64, f64) {
	(c.r as f64 / 255.0, c.g as f64 / 255.0, c.b as f64 / 255.0)
}

impl Hsv {
	pub fn new(h: f64, s: f64, v: f64) -> Self {
		Self { h, s, v }
	}

	pub fn to_color(&self) -> Color {
		let h = wrap_hue(self.h);
		let s = self.s.clamp(0.0, 1.0);
		let v = self.v.clamp(0.0, 1.0);

		if s == 0.0 {
			let c = channel_to_u8(v);
			return Color::new(c, c, c);
		}

		let sector = (h * 6.0).floor();
		let f = h * 6.0 - sector;
		let p = v * (1.0 - s);
		let q = v * (1.0 - s * f);
		let t = v * (1.0 - s * (1.0 - f));

		let (r, g, b) = match sector as u8 % 6 {
			0 => (v, t, p),
			1 => (q, v, p),
			2 => (p, v, t),
			3 => (p, q, v),
			4 => (t, p, v),
			_ => (v, p, q),
		};

		Color::new(channel_to_u8(r), channel_to_u8(g), channel_to_u8(b))
	}
}

impl From<Color> for Hsv {
	fn from(c: Color) -> Self {
		let (r, g, b) = normalized(c);
		let maxc = r.max(g).max(b);
		let minc = r.min(g).min(b);

		if maxc == minc {
			return Hsv::new(0.0, 0.0, maxc);
		}

		Hsv::new(hue_from_rgb(r, g, b, maxc, minc), (maxc - minc) / maxc, maxc)
	}
}

impl From<Hsv> for Color {
	fn from(hsv: Hsv) -> Self {
		hsv.to_color()
	}
}

impl From<Color> for Hls {
	fn from(c: Color) -> Self {
		let (r, g, b) = normalized(c);
		let maxc = r.max(g).max(b);
		let minc = r.min(g).min(b);
		let sum = maxc + minc;
		let l = sum / 2.0;

		if maxc == minc {
			return Hls { h: 0.0, l, s: 0.0 };
		}

		let range = maxc - minc;
		let s = if l <= 0.5 { range / sum } else { range / (2.0 - sum) };

		Hls { h: hue_from_rgb(r, g, b, maxc, minc), l, s }
	}
}
