use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::palettes::palette::Color;

pub const CATALOG_FILE_NAME: &str = "mf_twister_all_colors.json";

const BUILTIN_CATALOG: &str = include_str!("data/mf_twister_all_colors.json");

/// The fixed set of colors a Midi Fighter Twister can display.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorCatalog {
	colors: Vec<Color>,
}

impl ColorCatalog {
	pub fn new(colors: Vec<Color>) -> Self {
		Self { colors }
	}

	pub fn builtin() -> Self {
		Self::from_json_str(BUILTIN_CATALOG).expect("built-in catalog is valid JSON")
	}

	pub fn from_json_str(s: &str) -> Result<Self, CatalogError> {
		let colors: Vec<Color> = serde_json::from_str(s)?;
		Ok(Self { colors })
	}

	pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
		let colors: Vec<Color> = serde_json::from_reader(reader)?;
		Ok(Self { colors })
	}

	pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
		let f = File::open(path)?;
		Self::from_reader(BufReader::new(f))
	}

	pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CatalogError> {
		let f = File::create(path)?;
		let mut writer = BufWriter::new(f);
		self.write_json(&mut writer)?;
		writer.flush()?;
		Ok(())
	}

	pub fn write_json<W: Write>(&self, writer: W) -> Result<(), CatalogError> {
		let formatter = PrettyFormatter::with_indent(b"    ");
		let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
		self.colors.serialize(&mut ser)?;
		Ok(())
	}

	pub fn colors(&self) -> &[Color] {
		&self.colors
	}

	pub fn len(&self) -> usize {
		self.colors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}
}

#[derive(Debug)]
pub enum CatalogError {
	InvalidJson(serde_json::Error),
	IoErr(std::io::Error),
}

impl Display for CatalogError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			CatalogError::InvalidJson(e) => write!(f, "invalid color catalog: {e}"),
			CatalogError::IoErr(e) => write!(f, "io error: {e}"),
		}
	}
}

impl std::error::Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
	fn from(e: std::io::Error) -> Self {
		CatalogError::IoErr(e)
	}
}

impl From<serde_json::Error> for CatalogError {
	fn from(e: serde_json::Error) -> Self {
		CatalogError::InvalidJson(e)
	}
}
