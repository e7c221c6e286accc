use std::path::PathBuf;

use anyhow::Result;
use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::commands::OutputArgs;
use crate::preview::print_palette;
use palettegen_rs::export::ExportTarget;
use palettegen_rs::palettes::catalog::ColorCatalog;
use palettegen_rs::palettes::palette::{Color, Palette};

pub(crate) fn load_catalog(path: &Option<PathBuf>) -> ColorCatalog {
	let Some(path) = path else {
		return ColorCatalog::builtin();
	};

	match ColorCatalog::load_from_file(path) {
		Ok(catalog) => {
			debug!("loaded {} colors from {}", catalog.len(), path.display());
			catalog
		}
		// only mf_twister needs the catalog, everything else still works
		Err(e) => {
			warn!("Can't load color catalog {}: {e}", path.display());
			ColorCatalog::default()
		}
	}
}

pub(crate) fn make_rng(seed: Option<u64>) -> StdRng {
	match seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_os_rng(),
	}
}

pub(crate) fn export_target(output: &OutputArgs) -> Result<ExportTarget> {
	let dir = match &output.out_dir {
		Some(dir) => dir.clone(),
		None => output.location.resolve()?,
	};

	let target = ExportTarget::new(&dir);
	Ok(match &output.counter_dir {
		Some(counter_dir) => target.with_counter_dir(counter_dir),
		None => target,
	})
}

pub(crate) fn preview_and_export(palette: &Palette, title: &str, stem: &str, output: &OutputArgs) -> Result<Option<PathBuf>> {
	println!("\n{title} - {} grid:", palette.size());
	print_palette(palette, "");
	println!();
	print_hex_listing(palette.colors(), palette.cols());

	let target = export_target(output)?;
	if output.dry_run {
		println!("\nDry run, would save to {}", target.next_path(stem).display());
		return Ok(None);
	}

	let path = target.save(palette, stem)?;
	println!("\nSaved palette image to: {}", path.display());
	Ok(Some(path))
}

pub(crate) fn print_hex_listing(colors: &[Color], per_line: usize) {
	let mut codes = colors.iter().map(|c| c.to_string()).collect::<Vec<String>>();
	codes.sort();

	for line in codes.chunks(per_line.max(1)) {
		println!("{}", line.join(" "));
	}
}
