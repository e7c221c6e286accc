use anyhow::Result;

use crate::commands::{SortArgs, SortKey};
use crate::preview::blocks;
use palettegen_rs::ordering::hilbert::sort_by_hilbert;
use palettegen_rs::ordering::hue_saturation::sort_by_hue_saturation;
use palettegen_rs::palettes::palette::Palette;

pub(crate) fn sort_colors(args: &SortArgs) -> Result<()> {
	let colors = Palette::load_colors_from_file(&args.input)?;

	let sorted = match args.key {
		SortKey::HueSaturation => sort_by_hue_saturation(&colors),
		SortKey::Hilbert => sort_by_hilbert(&colors, args.hilbert_order),
	};

	if sorted.len() < colors.len() {
		eprintln!("NOTE: Dropped {} duplicate colors", colors.len() - sorted.len());
	}

	for line in sorted.chunks(args.cols.max(1)) {
		let codes = line.iter().map(|c| c.to_string()).collect::<Vec<String>>();
		println!("{}  {}", blocks(line), codes.join(" "));
	}

	Ok(())
}
