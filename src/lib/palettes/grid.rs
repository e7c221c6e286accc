use std::fmt::{Display, Formatter};
use std::str::FromStr;

use regex::{Captures, Regex};

use crate::palettes::palette::PaletteError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridSize {
	pub cols: usize,
	pub rows: usize,
}

impl GridSize {
	/// The Midi Fighter Twister layout: 16 encoders across 4 banks.
	pub const TWISTER: GridSize = GridSize::new(16, 4);
	pub const COMPACT: GridSize = GridSize::new(9, 3);
	pub const SQUARE: GridSize = GridSize::new(8, 8);
	pub const LARGE: GridSize = GridSize::new(16, 16);

	pub const MAX_SIDE: usize = 256;

	pub const fn new(cols: usize, rows: usize) -> Self {
		Self { cols, rows }
	}

	pub fn cells(&self) -> usize {
		self.cols.saturating_mul(self.rows)
	}
}

impl Default for GridSize {
	fn default() -> Self {
		Self::TWISTER
	}
}

impl Display for GridSize {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}x{}", self.cols, self.rows)
	}
}

impl FromStr for GridSize {
	type Err = PaletteError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let size = s.trim().to_lowercase();

		let grid = match size.as_str() {
			"twister" => GridSize::TWISTER,
			"compact" => GridSize::COMPACT,
			"square" => GridSize::SQUARE,
			"large" => GridSize::LARGE,

			_ => {
				let re = Regex::new(r"^(?P<W>\d+)x(?P<H>\d+)$").unwrap();
				let groups: Captures = match re.captures(&size) {
					None => return Err(PaletteError::InvalidGridSize { value: s.to_string() }),
					Some(captures) => captures
				};

				let cols = groups["W"].parse::<usize>().unwrap_or_default();
				let rows = groups["H"].parse::<usize>().unwrap_or_default();
				GridSize::new(cols, rows)
			}
		};

		// the rows end up as PNG image lines, keep them well inside u32
		if grid.cols == 0 || grid.rows == 0 || grid.cols > GridSize::MAX_SIDE || grid.rows > GridSize::MAX_SIDE {
			return Err(PaletteError::InvalidGridSize { value: s.to_string() });
		}

		Ok(grid)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rejects_oversized_grids() {
		for s in ["5000000000x5000000000", "100000x100000", "257x1", "1x257", "99999999999999999999999x2"] {
			assert!(s.parse::<GridSize>().is_err(), "{s} should not parse");
		}
		assert_eq!("256x256".parse::<GridSize>().unwrap().cells(), 65536);
	}

	#[test]
	fn cells_saturates() {
		assert_eq!(GridSize::new(usize::MAX, 2).cells(), usize::MAX);
	}
}
