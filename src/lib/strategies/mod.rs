use std::fmt::{Display, Formatter};

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::palettes::catalog::ColorCatalog;
use crate::palettes::grid::GridSize;
use crate::palettes::palette::{Color, Palette};

pub mod harmony;
pub mod twister;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
	DistinctHues,
	SplitComplementary,
	TriadicVariations,
	AnalogousExtended,
	MonochromaticColumns,
	WarmCoolContrast,
	PastelDarkContrast,
	RandomWithHarmony,
	Complementary,
	ShadesOfGray,
	Tetradic,
	RainbowDesaturatedRows,
	MfTwister,
}

pub const ALL_STRATEGIES: [Strategy; 13] = [
	Strategy::DistinctHues,
	Strategy::SplitComplementary,
	Strategy::TriadicVariations,
	Strategy::AnalogousExtended,
	Strategy::MonochromaticColumns,
	Strategy::WarmCoolContrast,
	Strategy::PastelDarkContrast,
	Strategy::RandomWithHarmony,
	Strategy::Complementary,
	Strategy::ShadesOfGray,
	Strategy::Tetradic,
	Strategy::RainbowDesaturatedRows,
	Strategy::MfTwister,
];

impl Strategy {
	pub fn name(&self) -> &'static str {
		match self {
			Strategy::DistinctHues => "distinct_hues",
			Strategy::SplitComplementary => "split_complementary",
			Strategy::TriadicVariations => "triadic_variations",
			Strategy::AnalogousExtended => "analogous_extended",
			Strategy::MonochromaticColumns => "monochromatic_columns",
			Strategy::WarmCoolContrast => "warm_cool_contrast",
			Strategy::PastelDarkContrast => "pastel_dark_contrast",
			Strategy::RandomWithHarmony => "random_with_harmony",
			Strategy::Complementary => "complementary",
			Strategy::ShadesOfGray => "shades_of_gray",
			Strategy::Tetradic => "tetradic",
			Strategy::RainbowDesaturatedRows => "rainbow_desaturated_rows",
			Strategy::MfTwister => "mf_twister",
		}
	}

	pub fn pretty_name(&self) -> String {
		prettify_name(self.name())
	}

	pub fn file_stem(&self) -> String {
		safe_file_stem(self.name())
	}

	pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Strategy {
		*ALL_STRATEGIES.choose(rng).unwrap_or(&Strategy::DistinctHues)
	}
}

impl Display for Strategy {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.name())
	}
}

pub fn prettify_name(name: &str) -> String {
	name.split('_')
		.filter(|w| !w.is_empty())
		.map(|w| match w {
			"mf" => "MF".to_string(),
			_ => {
				let mut chars = w.chars();
				match chars.next() {
					Some(first) => first.to_uppercase().chain(chars).collect(),
					None => String::new(),
				}
			}
		})
		.collect::<Vec<String>>()
		.join(" ")
}

pub fn safe_file_stem(name: &str) -> String {
	name.replace('_', "-").to_lowercase()
}

/// Per-channel weights for sampling catalog colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BiasAmounts {
	pub red: f64,
	pub green: f64,
	pub blue: f64,
}

impl Default for BiasAmounts {
	fn default() -> Self {
		Self { red: 1.0, green: 1.0, blue: 1.0 }
	}
}

impl BiasAmounts {
	pub fn new(red: f64, green: f64, blue: f64) -> Result<Self, GenerateError> {
		for (channel, amount) in [("red", red), ("green", green), ("blue", blue)] {
			if !amount.is_finite() || amount < 0.0 {
				return Err(GenerateError::InvalidBias { channel, amount });
			}
		}

		Ok(Self { red, green, blue })
	}

	pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
		let mut amount = || (rng.random_range(0.5..2.0_f64) * 100.0).round() / 100.0;
		Self {
			red: amount(),
			green: amount(),
			blue: amount(),
		}
	}

	pub fn is_neutral(&self) -> bool {
		self.red == 1.0 && self.green == 1.0 && self.blue == 1.0
	}

	pub fn weight(&self, c: Color) -> f64 {
		c.r as f64 * self.red + c.g as f64 * self.green + c.b as f64 * self.blue
	}
}

impl Display for BiasAmounts {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "R {:.2}, G {:.2}, B {:.2}", self.red, self.green, self.blue)
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct GenerateRequest {
	pub strategy: Option<Strategy>,
	pub size: GridSize,
	/// User hue shift per row, as a fraction of a full turn. Missing rows are not shifted.
	pub hue_shifts: Vec<f64>,
	pub bias: Option<BiasAmounts>,
}

impl GenerateRequest {
	pub fn new(strategy: Option<Strategy>, size: GridSize) -> Self {
		Self {
			strategy,
			size,
			hue_shifts: Vec::new(),
			bias: None,
		}
	}

	pub fn with_hue_shifts(mut self, hue_shifts: Vec<f64>) -> Self {
		self.hue_shifts = hue_shifts;
		self
	}

	pub fn with_hue_shifts_degrees(self, degrees: &[f64]) -> Self {
		self.with_hue_shifts(degrees.iter().map(|d| d / 360.0).collect())
	}

	pub fn with_bias(mut self, bias: Option<BiasAmounts>) -> Self {
		self.bias = bias;
		self
	}

	pub fn row_hue_shifts(&self) -> Vec<f64> {
		let mut shifts = self.hue_shifts.iter().copied().take(self.size.rows).collect::<Vec<f64>>();
		shifts.resize(self.size.rows, 0.0);
		shifts
	}

	pub fn effective_bias(&self) -> Option<BiasAmounts> {
		self.bias.filter(|b| !b.is_neutral())
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedPalette {
	pub strategy: Strategy,
	pub palette: Palette,
}

#[derive(Debug, PartialEq)]
pub enum GenerateError {
	EmptyCatalog,
	InvalidBias { channel: &'static str, amount: f64 },
	InvalidHueShift { row: usize, shift: f64 },
}

impl Display for GenerateError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			GenerateError::EmptyCatalog => write!(f, "The color catalog is empty, mf_twister has nothing to pick from"),
			GenerateError::InvalidBias { channel, amount } => write!(f, "Invalid {channel} bias amount {amount} (must be a finite number >= 0)"),
			GenerateError::InvalidHueShift { row, shift } => write!(f, "Invalid hue shift {shift} for row {}", row + 1),
		}
	}
}

impl std::error::Error for GenerateError {}

pub fn random_row_shifts<R: Rng + ?Sized>(rows: usize, rng: &mut R) -> Vec<f64> {
	const RANGES: [(f64, f64); 3] = [(0.02, 0.06), (0.04, 0.10), (0.06, 0.14)];

	// first row stays put, rows past the fourth too
	let mut shifts = vec![0.0; rows];
	for (i, (lo, hi)) in RANGES.iter().enumerate() {
		if let Some(shift) = shifts.get_mut(i + 1) {
			*shift = rng.random_range(*lo..*hi);
		}
	}

	if rng.random_bool(0.5) {
		shifts.iter_mut().skip(1).for_each(|s| *s = -*s);
	}

	shifts
}

pub fn generate<R: Rng + ?Sized>(req: &GenerateRequest, catalog: &ColorCatalog, rng: &mut R) -> Result<GeneratedPalette, GenerateError> {
	for (row, shift) in req.hue_shifts.iter().enumerate() {
		if !shift.is_finite() {
			return Err(GenerateError::InvalidHueShift { row, shift: *shift });
		}
	}

	if let Some(bias) = req.bias {
		BiasAmounts::new(bias.red, bias.green, bias.blue)?;
	}

	let strategy = match req.strategy {
		Some(s) => s,
		None => Strategy::random(rng),
	};

	log::debug!("generating {} palette, {} grid", strategy.name(), req.size);

	let row_shifts = random_row_shifts(req.size.rows, rng);
	let hue_shifts = req.row_hue_shifts();
	let offsets = harmony::RowOffsets::new(&row_shifts, &hue_shifts);

	let palette = match strategy {
		Strategy::DistinctHues => harmony::distinct_hues(req.size, &offsets, rng),
		Strategy::SplitComplementary => harmony::split_complementary(req.size, &offsets, rng),
		Strategy::TriadicVariations => harmony::triadic_variations(req.size, &offsets, rng),
		Strategy::AnalogousExtended => harmony::analogous_extended(req.size, &offsets, rng),
		Strategy::MonochromaticColumns => harmony::monochromatic_columns(req.size, &offsets, rng),
		Strategy::WarmCoolContrast => harmony::warm_cool_contrast(req.size, &offsets, rng),
		Strategy::PastelDarkContrast => harmony::pastel_dark_contrast(req.size, &offsets, rng),
		Strategy::RandomWithHarmony => harmony::random_with_harmony(req.size, &offsets, rng),
		Strategy::Complementary => harmony::complementary(req.size, &offsets, rng),
		Strategy::ShadesOfGray => harmony::shades_of_gray(req.size, &offsets, rng),
		Strategy::Tetradic => harmony::tetradic(req.size, &offsets, rng),
		Strategy::RainbowDesaturatedRows => harmony::rainbow_desaturated_rows(req.size, &offsets),
		Strategy::MfTwister => twister::mf_twister(req.size, req.effective_bias(), catalog, rng)?,
	};

	Ok(GeneratedPalette { strategy, palette })
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	#[test]
	fn names() {
		assert_eq!(Strategy::MfTwister.pretty_name(), "MF Twister");
		assert_eq!(Strategy::WarmCoolContrast.pretty_name(), "Warm Cool Contrast");
		assert_eq!(Strategy::RainbowDesaturatedRows.file_stem(), "rainbow-desaturated-rows");
		assert_eq!(safe_file_stem("Manual_Input"), "manual-input");
	}

	#[test]
	fn row_shifts_follow_row_ranges() {
		let mut rng = StdRng::seed_from_u64(7);
		for _ in 0..200 {
			let shifts = random_row_shifts(6, &mut rng);
			assert_eq!(shifts[0], 0.0);
			assert!((0.02..0.06).contains(&shifts[1].abs()));
			assert!((0.04..0.10).contains(&shifts[2].abs()));
			assert!((0.06..0.14).contains(&shifts[3].abs()));
			assert_eq!(shifts[4], 0.0);
			assert_eq!(shifts[5], 0.0);
			// all shifted rows point the same way
			assert_eq!(shifts[1].signum(), shifts[3].signum());
		}

		assert_eq!(random_row_shifts(1, &mut rng), vec![0.0]);
	}

	#[test]
	fn hue_shifts_are_padded_to_row_count() {
		let req = GenerateRequest::new(None, GridSize::new(2, 3)).with_hue_shifts_degrees(&[90.0]);
		assert_eq!(req.row_hue_shifts(), vec![0.25, 0.0, 0.0]);
	}

	#[test]
	fn neutral_bias_is_ignored() {
		let req = GenerateRequest::new(None, GridSize::TWISTER).with_bias(Some(BiasAmounts::default()));
		assert_eq!(req.effective_bias(), None);
	}

	#[test]
	fn random_bias_is_rounded() {
		let mut rng = StdRng::seed_from_u64(3);
		let bias = BiasAmounts::random(&mut rng);
		for v in [bias.red, bias.green, bias.blue] {
			assert!((0.5..=2.0).contains(&v));
			assert!(((v * 100.0).round() - v * 100.0).abs() < 1e-9);
		}
	}
}
