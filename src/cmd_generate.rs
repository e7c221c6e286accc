use std::path::PathBuf;

use anyhow::Result;
use log::info;

use crate::commands::GenerateArgs;
use crate::common::*;
use palettegen_rs::ordering::arrange;
use palettegen_rs::strategies::{generate, BiasAmounts, GenerateRequest, Strategy};

pub(crate) fn generate_palette(args: &GenerateArgs) -> Result<Option<PathBuf>> {
	let mut rng = make_rng(args.seed);

	let bias = if args.random_bias {
		Some(BiasAmounts::random(&mut rng))
	} else if args.has_bias() {
		Some(BiasAmounts::new(
			args.red.unwrap_or(1.0),
			args.green.unwrap_or(1.0),
			args.blue.unwrap_or(1.0),
		)?)
	} else {
		None
	};

	// only mf_twister samples the catalog
	let catalog = match args.strategy {
		Some(s) if s != Strategy::MfTwister => Default::default(),
		_ => load_catalog(&args.catalog),
	};

	let request = GenerateRequest::new(args.strategy, args.grid)
		.with_hue_shifts_degrees(&args.hue_shifts)
		.with_bias(bias);

	let mut generated = generate(&request, &catalog, &mut rng)?;
	info!("generated {} palette", generated.strategy);

	arrange(&mut generated.palette, args.arrange.arrangement, args.arrange.hilbert_order);

	let mut title = format!("Preview of {} palette", generated.strategy.pretty_name());
	if generated.strategy == Strategy::MfTwister {
		match request.effective_bias() {
			Some(bias) => title += &format!(" (Bias: {bias})"),
			None => title += " (No Bias)",
		}
	}

	preview_and_export(&generated.palette, &title, &generated.strategy.file_stem(), &args.output)
}
