use std::fs;

use anyhow::Result;

use crate::commands::DistinctArgs;
use crate::common::*;
use crate::preview::blocks;
use palettegen_rs::ordering::maximin::select_distinct;
use palettegen_rs::palettes::catalog::{CATALOG_FILE_NAME, ColorCatalog};

fn subset_file_name(count: usize) -> String {
	format!("mf_twister_{count}_colors.json")
}

pub(crate) fn distinct_colors(args: &DistinctArgs) -> Result<()> {
	let catalog = load_catalog(&args.catalog);
	if catalog.is_empty() {
		anyhow::bail!("The color catalog is empty")
	}

	let mut rng = make_rng(args.seed);
	fs::create_dir_all(&args.out_dir)?;

	let all_path = args.out_dir.join(CATALOG_FILE_NAME);
	catalog.save_to_file(&all_path)?;
	println!("Saved all {} catalog colors to: {}", catalog.len(), all_path.display());

	for &count in &args.counts {
		let selected = select_distinct(catalog.colors(), count, &mut rng);
		if selected.len() < count {
			eprintln!("NOTE: The catalog only has {} distinct colors", selected.len());
		}

		let path = args.out_dir.join(subset_file_name(count));
		ColorCatalog::new(selected.clone()).save_to_file(&path)?;

		println!("{}", blocks(&selected));
		println!("Saved {} colors to: {}", selected.len(), path.display());
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn writes_full_catalog_next_to_subsets() {
		let dir = tempfile::tempdir().unwrap();
		let args = DistinctArgs {
			counts: vec![4],
			catalog: None,
			seed: Some(3),
			out_dir: dir.path().to_path_buf(),
		};
		distinct_colors(&args).unwrap();

		let all = ColorCatalog::load_from_file(dir.path().join(CATALOG_FILE_NAME)).unwrap();
		assert_eq!(all, ColorCatalog::builtin());

		let subset = ColorCatalog::load_from_file(dir.path().join(subset_file_name(4))).unwrap();
		assert_eq!(subset.len(), 4);
	}
}
