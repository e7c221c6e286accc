use log::{debug, warn};
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use crate::ordering::hue_saturation::sort_rows;
use crate::palettes::catalog::ColorCatalog;
use crate::palettes::grid::GridSize;
use crate::palettes::palette::{Color, Palette, dedup_colors};
use crate::strategies::{BiasAmounts, GenerateError};

/// The color a catalog entry ends up as after going through HSV and back.
pub fn achievable_color(c: Color) -> Color {
	c.to_hsv().to_color()
}

pub fn achievable_colors(catalog: &ColorCatalog) -> Vec<Color> {
	let mapped = catalog.colors().iter().copied().map(achievable_color).collect::<Vec<Color>>();
	dedup_colors(&mapped)
}

pub fn biased_selection<R: Rng + ?Sized>(candidates: &[Color], count: usize, bias: &BiasAmounts, rng: &mut R) -> Vec<Color> {
	if candidates.is_empty() {
		return Vec::new();
	}

	let weights = candidates.iter().map(|c| bias.weight(*c)).collect::<Vec<f64>>();
	match WeightedIndex::new(&weights) {
		Ok(dist) => (0..count).map(|_| candidates[dist.sample(rng)]).collect(),
		// every weight is zero
		Err(_) => (0..count).map(|_| candidates[rng.random_range(0..candidates.len())]).collect(),
	}
}

fn pick_index<R: Rng + ?Sized>(pool: &[(Color, Color)], bias: Option<&BiasAmounts>, rng: &mut R) -> usize {
	if let Some(bias) = bias {
		let weights = pool.iter().map(|(c, _)| bias.weight(*c)).collect::<Vec<f64>>();
		if let Ok(dist) = WeightedIndex::new(&weights) {
			return dist.sample(rng);
		}
	}

	rng.random_range(0..pool.len())
}

/// Draws unique achievable colors from the catalog until the grid is full, then sorts
/// each row by hue and saturation.
pub fn mf_twister<R: Rng + ?Sized>(size: GridSize, bias: Option<BiasAmounts>, catalog: &ColorCatalog, rng: &mut R) -> Result<Palette, GenerateError> {
	if catalog.is_empty() {
		return Err(GenerateError::EmptyCatalog);
	}

	let mut pool = catalog.colors().iter()
		.map(|c| (*c, achievable_color(*c)))
		.collect::<Vec<(Color, Color)>>();

	if let Some(bias) = &bias {
		debug!("sampling catalog with bias {bias}");
	}

	let needed = size.cells();
	let mut chosen = Vec::with_capacity(needed);
	while chosen.len() < needed && !pool.is_empty() {
		let idx = pick_index(&pool, bias.as_ref(), rng);
		let picked = pool[idx].1;
		// other entries that map to the same color leave the pool too
		pool.retain(|(_, a)| *a != picked);
		chosen.push(picked);
	}

	if chosen.len() < needed {
		warn!("catalog only has {} distinct colors, padding {} cells with black", chosen.len(), needed - chosen.len());
	}

	let mut palette = Palette::from_colors_padded(size, chosen);
	sort_rows(&mut palette);
	Ok(palette)
}
