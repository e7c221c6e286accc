use anyhow::Result;

use crate::commands::ListArgs;
use crate::common::*;
use crate::preview::print_palette;
use palettegen_rs::strategies::{generate, GenerateRequest, ALL_STRATEGIES};

pub(crate) fn list_strategies(args: &ListArgs) -> Result<()> {
	let mut rng = make_rng(args.seed);
	let catalog = load_catalog(&args.catalog);

	let names = ALL_STRATEGIES.iter().map(|s| s.pretty_name()).collect::<Vec<String>>();
	let name_width = names.iter().map(|n| n.len()).max().unwrap_or_default();

	println!("Available strategies ({} grid):\n", args.grid);

	for (i, (strategy, name)) in ALL_STRATEGIES.iter().zip(names.iter()).enumerate() {
		let prefix = format!("{:>2}. {name:<name_width$}  ", i + 1);
		let request = GenerateRequest::new(Some(*strategy), args.grid)
			.with_hue_shifts_degrees(&args.hue_shifts);

		match generate(&request, &catalog, &mut rng) {
			Ok(generated) => {
				print!("{prefix}");
				print_palette(&generated.palette, &" ".repeat(prefix.len()));
			}
			Err(e) => println!("{prefix}Palette generation failed: {e}"),
		}
		println!();
	}

	Ok(())
}
