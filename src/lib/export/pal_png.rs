use std::io;
use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::export::ExportError;
use crate::palettes::palette::Palette;

pub fn encode_png<W: Write>(palette: &Palette, w: W) -> Result<(), ExportError> {
	let (Ok(width), Ok(height)) = (u32::try_from(palette.cols()), u32::try_from(palette.rows())) else {
		return Err(io::Error::new(io::ErrorKind::InvalidInput, "palette is too large for a PNG image").into());
	};

	let mut encoder = png::Encoder::new(w, width, height);
	encoder.set_color(png::ColorType::Rgb);
	encoder.set_depth(png::BitDepth::Eight);
	let mut writer = encoder.write_header()?;

	let rgb = palette.colors().iter()
		.flat_map(|c| [c.r, c.g, c.b])
		.collect::<Vec<u8>>();

	writer.write_image_data(&rgb)?;
	writer.finish()?;
	Ok(())
}

pub fn write_png<P: AsRef<Path>>(palette: &Palette, path: P) -> Result<(), ExportError> {
	let path = path.as_ref();
	let dir = match path.parent() {
		Some(p) if !p.as_os_str().is_empty() => p,
		_ => Path::new("."),
	};

	let mut tmp = NamedTempFile::new_in(dir)?;
	{
		let mut w = BufWriter::new(tmp.as_file_mut());
		encode_png(palette, &mut w)?;
		w.flush()?;
	}

	tmp.persist(path).map_err(|e| e.error)?;
	Ok(())
}
