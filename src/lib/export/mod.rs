use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::export::counter::FilenameCounter;
use crate::palettes::palette::Palette;

pub mod counter;
pub mod pal_png;

pub const GENERATED_PALETTES_SUBFOLDER: &str = "generated_palettes";

const COLOR_PALETTES_PATH: [&str; 3] = ["Documents", "Bitwig Studio", "Color Palettes"];

#[derive(clap::ValueEnum, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum SaveLocation {
	/// Bitwig's "Color Palettes" folder
	#[default] ColorPalettes,
	/// The "generated_palettes" folder inside "Color Palettes"
	Subfolder,
	/// The current working directory
	CurrentDir,
}

impl Display for SaveLocation {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			SaveLocation::ColorPalettes => write!(f, "color-palettes"),
			SaveLocation::Subfolder => write!(f, "subfolder"),
			SaveLocation::CurrentDir => write!(f, "current-dir"),
		}
	}
}

impl SaveLocation {
	pub fn resolve(&self) -> Result<PathBuf, ExportError> {
		match self {
			SaveLocation::ColorPalettes => color_palettes_dir(),
			SaveLocation::Subfolder => Ok(color_palettes_dir()?.join(GENERATED_PALETTES_SUBFOLDER)),
			SaveLocation::CurrentDir => Ok(std::env::current_dir()?),
		}
	}
}

fn home_dir() -> Option<PathBuf> {
	std::env::var_os("HOME")
		.or_else(|| std::env::var_os("USERPROFILE"))
		.filter(|h| !h.is_empty())
		.map(PathBuf::from)
}

pub fn color_palettes_dir() -> Result<PathBuf, ExportError> {
	let home = home_dir().ok_or(ExportError::NoHomeDirectory)?;
	Ok(COLOR_PALETTES_PATH.iter().fold(home, |p, part| p.join(part)))
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExportTarget {
	pub dir: PathBuf,
	pub counter_dir: PathBuf,
}

impl ExportTarget {
	pub fn new<P: AsRef<Path>>(dir: P) -> Self {
		Self {
			dir: dir.as_ref().to_path_buf(),
			counter_dir: dir.as_ref().to_path_buf(),
		}
	}

	pub fn with_counter_dir<P: AsRef<Path>>(mut self, counter_dir: P) -> Self {
		self.counter_dir = counter_dir.as_ref().to_path_buf();
		self
	}

	pub fn next_path(&self, stem: &str) -> PathBuf {
		let counter = FilenameCounter::new(&self.counter_dir, stem);
		self.dir.join(counter.file_name())
	}

	pub fn save(&self, palette: &Palette, stem: &str) -> Result<PathBuf, ExportError> {
		fs::create_dir_all(&self.dir)?;

		let counter = FilenameCounter::new(&self.counter_dir, stem);
		let path = self.dir.join(counter.file_name());
		debug!("writing {}x{} palette to {}", palette.cols(), palette.rows(), path.display());

		pal_png::write_png(palette, &path)?;
		counter.advance();

		info!("saved palette image {}", path.display());
		Ok(path)
	}
}

#[derive(Debug)]
pub enum ExportError {
	NoHomeDirectory,
	Png(png::EncodingError),
	IoErr(std::io::Error),
}

impl Display for ExportError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ExportError::NoHomeDirectory => write!(f, "Can't determine the home directory"),
			ExportError::Png(e) => write!(f, "png encoding error: {e}"),
			ExportError::IoErr(e) => write!(f, "io error: {e}"),
		}
	}
}

impl std::error::Error for ExportError {}

impl From<std::io::Error> for ExportError {
	fn from(e: std::io::Error) -> Self {
		ExportError::IoErr(e)
	}
}

impl From<png::EncodingError> for ExportError {
	fn from(e: png::EncodingError) -> Self {
		ExportError::Png(e)
	}
}
