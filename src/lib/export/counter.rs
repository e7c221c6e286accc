use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::warn;
use tempfile::NamedTempFile;

/// Persistent per-name sequence number for palette file names, stored as
/// `<stem>_counter.txt` holding the next number to use.
#[derive(Clone, Debug, PartialEq)]
pub struct FilenameCounter {
	dir: PathBuf,
	stem: String,
}

impl FilenameCounter {
	pub fn new<P: AsRef<Path>, S: Into<String>>(dir: P, stem: S) -> Self {
		Self {
			dir: dir.as_ref().to_path_buf(),
			stem: stem.into(),
		}
	}

	pub fn path(&self) -> PathBuf {
		self.dir.join(format!("{}_counter.txt", self.stem))
	}

	pub fn current(&self) -> u64 {
		fs::read_to_string(self.path())
			.ok()
			.and_then(|s| s.trim().parse::<u64>().ok())
			.unwrap_or(1)
	}

	pub fn file_name(&self) -> String {
		format!("{}_palette_{:03}.png", self.stem, self.current())
	}

	pub fn advance(&self) {
		let Some(next) = self.current().checked_add(1) else {
			warn!("Counter file {} is at its maximum, not advancing", self.path().display());
			return;
		};

		if let Err(e) = self.write(next) {
			warn!("Can't update counter file {}: {e}", self.path().display());
		}
	}

	fn write(&self, value: u64) -> std::io::Result<()> {
		fs::create_dir_all(&self.dir)?;
		let mut tmp = NamedTempFile::new_in(&self.dir)?;
		write!(tmp, "{value}")?;
		tmp.persist(self.path()).map_err(|e| e.error)?;
		Ok(())
	}
}
