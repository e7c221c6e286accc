use std::fmt::{Display, Formatter};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::palettes::color_space::{Hls, Hsv};
use crate::palettes::grid::GridSize;

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl From<[u8; 3]> for Color {
	fn from(v: [u8; 3]) -> Self {
		Self {
			r: v[0],
			g: v[1],
			b: v[2],
		}
	}
}

impl From<Color> for [u8; 3] {
	fn from(c: Color) -> Self {
		[c.r, c.g, c.b]
	}
}

impl From<u32> for Color {
	fn from(v: u32) -> Self {
		Self {
			r: ((v >> 16) & 0xFF) as u8,
			g: ((v >> 8) & 0xFF) as u8,
			b: (v & 0xFF) as u8,
		}
	}
}

impl From<Color> for u32 {
	fn from(c: Color) -> Self {
		((c.r as u32) << 16) | ((c.g as u32) << 8) | c.b as u32
	}
}

impl Color {
	pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	pub fn distance_squared(&self, other: &Color) -> u32 {
		let dr = self.r as i32 - other.r as i32;
		let dg = self.g as i32 - other.g as i32;
		let db = self.b as i32 - other.b as i32;
		(dr * dr + dg * dg + db * db) as u32
	}

	pub fn to_hsv(&self) -> Hsv {
		Hsv::from(*self)
	}

	pub fn to_hls(&self) -> Hls {
		Hls::from(*self)
	}
}

impl Display for Color {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "#{:06X}", u32::from(*self))
	}
}

impl FromStr for Color {
	type Err = PaletteError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();

		// remove common hexadecimal prefixes from the string prior to parsing
		let stripped = trimmed.strip_prefix("0x").unwrap_or(trimmed);
		let stripped = stripped.strip_prefix("#").unwrap_or(stripped);

		if stripped.len() != 6 || !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
			return Err(PaletteError::InvalidColor { value: trimmed.to_string() });
		}

		u32::from_str_radix(stripped, 16)
			.map(Color::from)
			.map_err(|_| PaletteError::InvalidColor { value: trimmed.to_string() })
	}
}

/// A fully populated grid of colors, stored row by row.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
	size: GridSize,
	colors: Vec<Color>,
}

impl Palette {
	pub fn new(size: GridSize) -> Self {
		Self {
			size,
			colors: vec![Color::BLACK; size.cells()],
		}
	}

	pub fn from_colors(size: GridSize, colors: Vec<Color>) -> Result<Self, PaletteError> {
		if colors.len() != size.cells() {
			return Err(PaletteError::WrongColorCount {
				expected: size.cells(),
				found: colors.len(),
			});
		}

		Ok(Self { size, colors })
	}

	pub fn from_colors_padded<I: IntoIterator<Item = Color>>(size: GridSize, colors: I) -> Self {
		let mut colors = colors.into_iter().take(size.cells()).collect::<Vec<Color>>();
		colors.resize(size.cells(), Color::BLACK);
		Self { size, colors }
	}

	pub fn size(&self) -> GridSize {
		self.size
	}

	pub fn rows(&self) -> usize {
		self.size.rows
	}

	pub fn cols(&self) -> usize {
		self.size.cols
	}

	pub fn len(&self) -> usize {
		self.colors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	pub fn get(&self, row: usize, col: usize) -> Color {
		self.colors[row * self.size.cols + col]
	}

	pub fn set(&mut self, row: usize, col: usize, c: Color) {
		self.colors[row * self.size.cols + col] = c;
	}

	pub fn colors(&self) -> &[Color] {
		&self.colors
	}

	pub fn row(&self, row: usize) -> &[Color] {
		let start = row * self.size.cols;
		&self.colors[start..start + self.size.cols]
	}

	pub fn row_iter(&self) -> impl Iterator<Item = &[Color]> {
		self.colors.chunks(self.size.cols)
	}

	pub fn unique_colors(&self) -> Vec<Color> {
		dedup_colors(&self.colors)
	}

	pub fn hex_codes(&self) -> Vec<String> {
		self.colors.iter().map(|c| c.to_string()).collect()
	}

	/// Reads a flat list of colors from a `.hex`/`.txt` or `.json` file.
	pub fn load_colors_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Color>, PaletteError> {
		match Self::guess_format(&path) {
			Some(PaletteFormat::Hex) => Self::colors_from_hex_file(&path),
			Some(PaletteFormat::Json) => Self::colors_from_json_file(&path),
			None => Err(PaletteError::InvalidFile),
		}
	}

	pub fn load_colors_from_string<S: Into<String>>(s: S, format: PaletteFormat) -> Result<Vec<Color>, PaletteError> {
		match format {
			PaletteFormat::Hex => Self::colors_from_hex_string(s),
			PaletteFormat::Json => Self::colors_from_json_string(s),
		}
	}

	fn guess_format<P: AsRef<Path>>(path: P) -> Option<PaletteFormat> {
		let ext = path.as_ref().extension()?
			.to_str()?
			.to_lowercase();

		match ext.as_str() {
			"hex" | "txt" => Some(PaletteFormat::Hex),
			"json" => Some(PaletteFormat::Json),
			_ => None
		}
	}
}

pub fn dedup_colors(colors: &[Color]) -> Vec<Color> {
	let mut seen = std::collections::HashSet::with_capacity(colors.len());
	colors.iter().copied().filter(|c| seen.insert(*c)).collect()
}

#[derive(Debug)]
pub enum PaletteError {
	InvalidFile,
	InvalidColor { value: String },
	InvalidGridSize { value: String },
	WrongColorCount { expected: usize, found: usize },
	InvalidTextLine { line: usize, msg: String },
	InvalidJsonEntry { index: usize, msg: String },
	IoErr(std::io::Error),
}

impl Display for PaletteError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PaletteError::InvalidFile => write!(f, "Invalid file"),
			PaletteError::InvalidColor { value } => write!(f, "\"{value}\" is not a valid hexadecimal color value (expected #RRGGBB)"),
			PaletteError::InvalidGridSize { value } => write!(f, "\"{value}\" is not a valid grid size (expected COLSxROWS up to 256x256 or a size name)"),
			PaletteError::WrongColorCount { expected, found } => write!(f, "Expected {expected} colors, found {found}"),
			PaletteError::InvalidTextLine { line, msg } => write!(f, "Invalid data in line {line}: {msg}"),
			PaletteError::InvalidJsonEntry { index, msg } => write!(f, "Invalid JSON array item at index {index}: {msg}"),
			PaletteError::IoErr(e) => write!(f, "io error: {e}"),
		}
	}
}

impl std::error::Error for PaletteError {}

impl From<std::io::Error> for PaletteError {
	fn from(e: std::io::Error) -> Self {
		PaletteError::IoErr(e)
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaletteFormat {
	Hex, // .hex, .txt
	Json, // .json
}

impl Display for PaletteFormat {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PaletteFormat::Hex => write!(f, "hex"),
			PaletteFormat::Json => write!(f, "json"),
		}
	}
}
