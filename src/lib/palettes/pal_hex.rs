use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::palettes::palette::{Color, Palette, PaletteError};

impl Palette {
	fn colors_from_hex_internal<R: Read + BufRead>(reader: R) -> Result<Vec<Color>, PaletteError> {
		let mut colors = Vec::new();

		for (i, line) in reader.lines().enumerate() {
			let trimmed_line = line?.trim().to_owned();

			// "#RRGGBB" is a color, "# text" is a comment
			if trimmed_line.is_empty() || trimmed_line == "#" || trimmed_line.starts_with("# ") || trimmed_line.starts_with("//") {
				continue;
			}

			let col = trimmed_line.parse::<Color>()
				.map_err(|_| PaletteError::InvalidTextLine { line: i + 1, msg: "Not a hexadecimal color value".to_string() })?;

			colors.push(col);
		}

		Ok(colors)
	}

	pub fn colors_from_hex_file<P: AsRef<Path>>(path: P) -> Result<Vec<Color>, PaletteError> {
		let f = File::open(path)?;
		let reader = BufReader::new(f);
		Self::colors_from_hex_internal(reader)
	}

	pub fn colors_from_hex_string<S: Into<String>>(s: S) -> Result<Vec<Color>, PaletteError> {
		let s = s.into();
		let mut reader = BufReader::new(s.as_bytes());
		Self::colors_from_hex_internal(&mut reader)
	}
}
