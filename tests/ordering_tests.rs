use std::collections::HashMap;

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use palettegen_rs::ordering::hilbert::{hilbert_distance, hilbert_index, sort_by_hilbert, DEFAULT_HILBERT_ORDER};
use palettegen_rs::ordering::hue_saturation::sort_by_hue_saturation;
use palettegen_rs::ordering::maximin::select_distinct;
use palettegen_rs::ordering::{arrange, Arrangement};
use palettegen_rs::palettes::catalog::ColorCatalog;
use palettegen_rs::palettes::grid::GridSize;
use palettegen_rs::palettes::palette::{dedup_colors, Color, Palette};

fn arb_colors() -> impl Strategy<Value = Vec<Color>> {
	prop::collection::vec(any::<[u8; 3]>().prop_map(Color::from), 0..80)
}

proptest! {
	#[test]
	fn hue_saturation_sort_is_an_idempotent_permutation(colors in arb_colors()) {
		let sorted = sort_by_hue_saturation(&colors);
		let mut expected = dedup_colors(&colors);
		prop_assert_eq!(sorted.len(), expected.len());

		prop_assert_eq!(sort_by_hue_saturation(&sorted), sorted.clone());

		let mut got = sorted.clone();
		got.sort_by_key(|c| u32::from(*c));
		expected.sort_by_key(|c| u32::from(*c));
		prop_assert_eq!(got, expected);
	}

	#[test]
	fn hilbert_sort_is_a_stable_permutation(colors in arb_colors(), order in 1u32..=16) {
		let sorted = sort_by_hilbert(&colors, order);
		prop_assert_eq!(sorted.len(), dedup_colors(&colors).len());
		prop_assert_eq!(sort_by_hilbert(&colors, order), sorted.clone());
		prop_assert_eq!(sort_by_hilbert(&sorted, order), sorted.clone());

		let indices = sorted.iter().map(|c| hilbert_index(*c, order)).collect::<Vec<u64>>();
		prop_assert!(indices.windows(2).all(|w| w[0] <= w[1]));
		prop_assert!(indices.iter().all(|i| *i < 1u64 << (2 * order)));
	}
}

#[test]
fn hilbert_curve_visits_every_cell_once() {
	for order in [1u32, 2, 3, 5] {
		let side = 1u32 << order;
		let mut cells = HashMap::new();
		for x in 0..side {
			for y in 0..side {
				let d = hilbert_distance([x, y], order);
				assert!(d < (side * side) as u64);
				assert!(cells.insert(d, (x, y)).is_none(), "index {d} visited twice");
			}
		}

		assert_eq!(cells[&0], (0, 0));
		assert_eq!(cells[&((side * side - 1) as u64)], (side - 1, 0));

		// consecutive indices are neighbouring cells
		for d in 1..(side * side) as u64 {
			let (ax, ay) = cells[&(d - 1)];
			let (bx, by) = cells[&d];
			assert_eq!(ax.abs_diff(bx) + ay.abs_diff(by), 1, "order {order}, step {d}");
		}
	}
}

#[test]
fn hilbert_groups_similar_hues() {
	let reds = [Color::new(255, 0, 0), Color::new(250, 10, 10)];
	let blue = Color::new(0, 0, 255);
	let sorted = sort_by_hilbert(&[reds[0], blue, reds[1]], DEFAULT_HILBERT_ORDER);

	let red_positions = sorted.iter().enumerate()
		.filter(|(_, c)| reds.contains(c))
		.map(|(i, _)| i)
		.collect::<Vec<usize>>();
	assert_eq!(red_positions[1] - red_positions[0], 1);
}

#[test]
fn maximin_selects_distinct_subsets_of_the_catalog() {
	let catalog = ColorCatalog::builtin();

	for count in [27, 64] {
		let mut rng = StdRng::seed_from_u64(count as u64);
		let selected = select_distinct(catalog.colors(), count, &mut rng);
		assert_eq!(selected.len(), count);
		assert_eq!(dedup_colors(&selected).len(), count);
		assert!(selected.iter().all(|c| catalog.colors().contains(c)));
	}

	let mut rng = StdRng::seed_from_u64(0);
	assert_eq!(select_distinct(catalog.colors(), 500, &mut rng).len(), catalog.len());
}

#[test]
fn maximin_spreads_out() {
	let catalog = ColorCatalog::builtin();
	let mut rng = StdRng::seed_from_u64(8);
	let selected = select_distinct(catalog.colors(), 8, &mut rng);

	let min_distance = |colors: &[Color]| {
		let mut min = u32::MAX;
		for (i, a) in colors.iter().enumerate() {
			for b in &colors[i + 1..] {
				min = min.min(a.distance_squared(b));
			}
		}
		min
	};

	// the eight neighbouring catalog entries are far closer together
	assert!(min_distance(&selected) > min_distance(&catalog.colors()[..8]));
}

#[test]
fn arrangements() {
	let colors = vec![
		Color::new(0, 0, 255), Color::new(255, 0, 0), Color::new(0, 255, 0),
		Color::new(0, 255, 0), Color::new(255, 255, 0), Color::new(255, 0, 255),
	];
	let original = Palette::from_colors(GridSize::new(3, 2), colors).unwrap();

	let mut pal = original.clone();
	arrange(&mut pal, Arrangement::AsGenerated, DEFAULT_HILBERT_ORDER);
	assert_eq!(pal, original);

	let mut pal = original.clone();
	arrange(&mut pal, Arrangement::Rows, DEFAULT_HILBERT_ORDER);
	assert_eq!(pal.row(0), &[Color::new(255, 0, 0), Color::new(0, 255, 0), Color::new(0, 0, 255)]);
	assert_eq!(pal.row(1), &[Color::new(255, 255, 0), Color::new(0, 255, 0), Color::new(255, 0, 255)]);

	let mut pal = original.clone();
	arrange(&mut pal, Arrangement::HueSaturation, DEFAULT_HILBERT_ORDER);
	assert_eq!(pal.colors(), &[
		Color::new(255, 0, 0), Color::new(255, 255, 0), Color::new(0, 255, 0),
		Color::new(0, 0, 255), Color::new(255, 0, 255), Color::BLACK,
	]);

	let mut pal = original.clone();
	arrange(&mut pal, Arrangement::Hilbert, DEFAULT_HILBERT_ORDER);
	assert_eq!(pal.len(), 6);
	assert_eq!(pal.unique_colors().len(), 6);
	assert_eq!(pal.get(1, 2), Color::BLACK);
}
