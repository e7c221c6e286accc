use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::palettes::palette::{Color, Palette, PaletteError};

/// Manual palettes accept both `"#RRGGBB"` strings and `[r, g, b]` triples.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonColor {
	Hex(String),
	Rgb([u8; 3]),
}

impl Palette {
	fn colors_from_json_internal<R: Read + BufRead>(reader: R) -> Result<Vec<Color>, PaletteError> {
		let colors: Vec<JsonColor> = serde_json::from_reader(reader)
			.map_err(|_| PaletteError::InvalidFile)?;

		colors.into_iter().enumerate().map(|(i, c)| {
			match c {
				JsonColor::Rgb(rgb) => Ok(Color::from(rgb)),
				JsonColor::Hex(s) => s.parse::<Color>()
					.map_err(|_| PaletteError::InvalidJsonEntry {
						index: i,
						msg: format!("\"{s}\" is not a valid hexadecimal color value"),
					}),
			}
		}).collect::<Result<Vec<Color>, PaletteError>>()
	}

	pub fn colors_from_json_file<P: AsRef<Path>>(path: P) -> Result<Vec<Color>, PaletteError> {
		let f = File::open(path)?;
		let reader = BufReader::new(f);
		Self::colors_from_json_internal(reader)
	}

	pub fn colors_from_json_string<S: Into<String>>(s: S) -> Result<Vec<Color>, PaletteError> {
		let s = s.into();
		let mut reader = BufReader::new(s.as_bytes());
		Self::colors_from_json_internal(&mut reader)
	}
}
