use clap::Parser;
use clap::Subcommand;
use const_format::formatcp;
use std::path::PathBuf;

use palettegen_rs::export::SaveLocation;
use palettegen_rs::ordering::Arrangement;
use palettegen_rs::ordering::hilbert::DEFAULT_HILBERT_ORDER;
use palettegen_rs::palettes::grid::GridSize;
use palettegen_rs::strategies::Strategy;

const GIT_HASH: &str = env!("GIT_HASH");
const GIT_BRANCH: &str = env!("GIT_BRANCH");
const GIT_VERSION: &str = env!("GIT_VERSION");
const BUILD_DATE: &str = env!("BUILD_DATE");

const CLAP_VERSION: &str = formatcp!("{GIT_VERSION} [{GIT_BRANCH}, {GIT_HASH}, {BUILD_DATE}]");

#[derive(Parser, Debug, Clone)]
#[command(version = CLAP_VERSION, about = "Generates color palette images for Bitwig Studio")]
pub(crate) struct Cli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	#[arg(long, global = true, help = "Enables debug logging.")]
	pub debug: bool,
}

fn parse_grid(s: &str) -> Result<GridSize, String> {
	s.parse::<GridSize>().map_err(|e| e.to_string())
}

fn parse_hue_shift(s: &str) -> Result<f64, String> {
	let degrees = s.trim().parse::<f64>().map_err(|e| e.to_string())?;
	if !(0.0..=360.0).contains(&degrees) {
		return Err(format!("{degrees} is not between 0 and 360 degrees"));
	}

	Ok(degrees)
}

fn parse_bias(s: &str) -> Result<f64, String> {
	let amount = s.trim().parse::<f64>().map_err(|e| e.to_string())?;
	if !amount.is_finite() || amount < 0.0 {
		return Err(format!("{amount} is not a valid bias amount (must be >= 0)"));
	}

	Ok(amount)
}

#[derive(clap::Args, Debug, Clone)]
pub(crate) struct OutputArgs {
	#[arg(short = 'l', long, value_enum, help = "Where to save the palette image.", default_value_t = SaveLocation::default())]
	pub location: SaveLocation,
	#[arg(short, long = "out-dir", help = "Saves the palette image to this directory instead. Takes precedence over --location.")]
	pub out_dir: Option<PathBuf>,
	#[arg(long = "counter-dir", help = "Directory for the file name counters. (default: the output directory)")]
	pub counter_dir: Option<PathBuf>,
	#[arg(short = 'n', long = "dry-run", help = "Only previews the palette, nothing is written.")]
	pub dry_run: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub(crate) struct ArrangeArgs {
	#[arg(short, long = "arrange", value_enum, help = "Re-orders the palette before saving.", default_value_t = Arrangement::default())]
	pub arrangement: Arrangement,
	#[arg(long = "hilbert-order", help = "Bits per axis of the Hilbert curve used by --arrange hilbert.",
	value_parser = clap::value_parser!(u32).range(1..=16), default_value_t = DEFAULT_HILBERT_ORDER)]
	pub hilbert_order: u32,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct GenerateArgs {
	#[arg(short, long, value_enum, help = "The generation strategy. Picks one at random if omitted.")]
	pub strategy: Option<Strategy>,

	#[arg(short, long, value_parser = parse_grid, help = "The grid size. Format COLSxROWS or one of twister, compact, square, large.",
	default_value = "twister")]
	pub grid: GridSize,

	#[arg(long = "shift", value_parser = parse_hue_shift, value_delimiter = ',',
	help = "Hue shift per row in degrees (0-360), comma separated. Missing rows aren't shifted.")]
	pub hue_shifts: Vec<f64>,

	#[arg(long, value_parser = parse_bias, help = "Red bias amount for mf_twister.")]
	pub red: Option<f64>,
	#[arg(long, value_parser = parse_bias, help = "Green bias amount for mf_twister.")]
	pub green: Option<f64>,
	#[arg(long, value_parser = parse_bias, help = "Blue bias amount for mf_twister.")]
	pub blue: Option<f64>,
	#[arg(long = "random-bias", conflicts_with_all = ["red", "green", "blue"], help = "Uses a random bias for mf_twister.")]
	pub random_bias: bool,

	#[command(flatten)]
	pub arrange: ArrangeArgs,

	#[arg(long, help = "Seeds the random number generator for reproducible palettes.")]
	pub seed: Option<u64>,
	#[arg(long, help = "Loads the color catalog for mf_twister from this JSON file.")]
	pub catalog: Option<PathBuf>,

	#[command(flatten)]
	pub output: OutputArgs,
}

impl GenerateArgs {
	pub(crate) fn has_bias(&self) -> bool {
		self.red.is_some() || self.green.is_some() || self.blue.is_some()
	}
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct ListArgs {
	#[arg(short, long, value_parser = parse_grid, help = "The grid size of the sample palettes.", default_value = "twister")]
	pub grid: GridSize,
	#[arg(long = "shift", value_parser = parse_hue_shift, value_delimiter = ',', help = "Hue shift per row in degrees (0-360), comma separated.")]
	pub hue_shifts: Vec<f64>,
	#[arg(long, help = "Seeds the random number generator.")]
	pub seed: Option<u64>,
	#[arg(long, help = "Loads the color catalog for mf_twister from this JSON file.")]
	pub catalog: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct ManualArgs {
	#[arg(help = "A .hex/.txt file with one color per line, or a .json array of colors.")]
	pub input: PathBuf,

	#[arg(short, long, value_parser = parse_grid, help = "The grid size. The file needs exactly one color per cell.", default_value = "twister")]
	pub grid: GridSize,

	#[command(flatten)]
	pub arrange: ArrangeArgs,

	#[command(flatten)]
	pub output: OutputArgs,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct DistinctArgs {
	#[arg(short = 'c', long = "count", value_delimiter = ',', help = "How many colors to select, comma separated.", default_values_t = [27, 64])]
	pub counts: Vec<usize>,
	#[arg(long, help = "Selects from this JSON color catalog instead of the built-in one.")]
	pub catalog: Option<PathBuf>,
	#[arg(long, help = "Seeds the random number generator.")]
	pub seed: Option<u64>,
	#[arg(short, long = "out-dir", help = "The directory to write the JSON files to.", default_value = ".")]
	pub out_dir: PathBuf,
}

#[derive(clap::ValueEnum, Clone, Copy, Default, Debug, PartialEq)]
pub(crate) enum SortKey {
	#[default] HueSaturation,
	Hilbert,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct SortArgs {
	#[arg(help = "A .hex/.txt file with one color per line, or a .json array of colors.")]
	pub input: PathBuf,
	#[arg(short, long, value_enum, help = "The sort key.", default_value_t = SortKey::default())]
	pub key: SortKey,
	#[arg(long = "hilbert-order", value_parser = clap::value_parser!(u32).range(1..=16), default_value_t = DEFAULT_HILBERT_ORDER,
	help = "Bits per axis of the Hilbert curve.")]
	pub hilbert_order: u32,
	#[arg(short, long, help = "How many colors to print per line.", default_value_t = 16)]
	pub cols: usize,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
	#[command(about = "Generates a palette and saves it as a PNG image")]
	Generate(GenerateArgs),

	#[command(about = "Lists all strategies with a sample palette each")]
	List(ListArgs),

	#[command(about = "Builds a palette from a list of colors")]
	Manual(ManualArgs),

	#[command(about = "Selects maximally distinct colors from the color catalog")]
	Distinct(DistinctArgs),

	#[command(about = "Sorts a list of colors perceptually")]
	Sort(SortArgs),
}
