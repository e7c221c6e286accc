use std::path::PathBuf;

use anyhow::Result;
use log::debug;

use crate::commands::ManualArgs;
use crate::common::*;
use palettegen_rs::ordering::arrange;
use palettegen_rs::palettes::palette::Palette;
use palettegen_rs::strategies::safe_file_stem;

const MANUAL_STRATEGY_NAME: &str = "manual_input";

pub(crate) fn manual_palette(args: &ManualArgs) -> Result<Option<PathBuf>> {
	let colors = Palette::load_colors_from_file(&args.input)?;
	debug!("read {} colors from {}", colors.len(), args.input.display());

	let mut palette = Palette::from_colors(args.grid, colors)?;
	arrange(&mut palette, args.arrange.arrangement, args.arrange.hilbert_order);

	preview_and_export(&palette, "Preview of Manual Input palette", &safe_file_stem(MANUAL_STRATEGY_NAME), &args.output)
}
