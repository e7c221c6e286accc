use std::fs::{self, File};

use palettegen_rs::export::counter::FilenameCounter;
use palettegen_rs::export::pal_png::encode_png;
use palettegen_rs::export::{ExportTarget, SaveLocation, GENERATED_PALETTES_SUBFOLDER};
use palettegen_rs::palettes::grid::GridSize;
use palettegen_rs::palettes::palette::{Color, Palette};

fn sample_palette() -> Palette {
	let colors = (0..27u32).map(|i| Color::new(i as u8 * 9, 255 - i as u8 * 9, 128)).collect();
	Palette::from_colors(GridSize::COMPACT, colors).unwrap()
}

#[test]
fn png_has_one_pixel_per_cell() {
	let palette = sample_palette();
	let mut buf = Vec::new();
	encode_png(&palette, &mut buf).unwrap();

	let decoder = png::Decoder::new(buf.as_slice());
	let mut reader = decoder.read_info().unwrap();
	let mut pixels = vec![0; reader.output_buffer_size()];
	let info = reader.next_frame(&mut pixels).unwrap();

	assert_eq!((info.width, info.height), (9, 3));
	assert_eq!(info.color_type, png::ColorType::Rgb);
	assert_eq!(info.bit_depth, png::BitDepth::Eight);

	// second row, first column
	let offset = 9 * 3;
	assert_eq!(&pixels[offset..offset + 3], &[81, 174, 128]);
}

#[test]
fn counter_starts_at_one() {
	let dir = tempfile::tempdir().unwrap();
	let counter = FilenameCounter::new(dir.path(), "mf-twister");

	assert_eq!(counter.current(), 1);
	assert_eq!(counter.file_name(), "mf-twister_palette_001.png");

	counter.advance();
	assert_eq!(counter.current(), 2);
	assert_eq!(fs::read_to_string(dir.path().join("mf-twister_counter.txt")).unwrap(), "2");
}

#[test]
fn broken_counter_restarts() {
	let dir = tempfile::tempdir().unwrap();
	fs::write(dir.path().join("tetradic_counter.txt"), "twelve").unwrap();

	let counter = FilenameCounter::new(dir.path(), "tetradic");
	assert_eq!(counter.current(), 1);

	fs::write(dir.path().join("tetradic_counter.txt"), "1234\n").unwrap();
	assert_eq!(counter.file_name(), "tetradic_palette_1234.png");
}

#[test]
fn maxed_out_counter_stays_put() {
	let dir = tempfile::tempdir().unwrap();
	fs::write(dir.path().join("rainbow_counter.txt"), u64::MAX.to_string()).unwrap();

	let counter = FilenameCounter::new(dir.path(), "rainbow");
	counter.advance();
	assert_eq!(counter.current(), u64::MAX);
}

#[test]
fn saving_advances_the_counter() {
	let dir = tempfile::tempdir().unwrap();
	let out = dir.path().join("palettes");
	let counters = dir.path().join("counters");
	let target = ExportTarget::new(&out).with_counter_dir(&counters);
	let palette = sample_palette();

	assert_eq!(target.next_path("distinct-hues"), out.join("distinct-hues_palette_001.png"));

	let first = target.save(&palette, "distinct-hues").unwrap();
	let second = target.save(&palette, "distinct-hues").unwrap();
	let other = target.save(&palette, "complementary").unwrap();

	assert_eq!(first, out.join("distinct-hues_palette_001.png"));
	assert_eq!(second, out.join("distinct-hues_palette_002.png"));
	assert_eq!(other, out.join("complementary_palette_001.png"));
	assert_eq!(fs::read_to_string(counters.join("distinct-hues_counter.txt")).unwrap(), "3");

	// only the images and no leftover temporary files
	assert_eq!(fs::read_dir(&out).unwrap().count(), 3);

	let decoder = png::Decoder::new(File::open(&first).unwrap());
	let reader = decoder.read_info().unwrap();
	assert_eq!(reader.info().width, 9);
}

#[test]
fn save_locations() {
	let dir = tempfile::tempdir().unwrap();
	// SAFETY: no other test in this binary reads HOME
	unsafe { std::env::set_var("HOME", dir.path()) };

	let palettes = SaveLocation::ColorPalettes.resolve().unwrap();
	assert_eq!(palettes, dir.path().join("Documents").join("Bitwig Studio").join("Color Palettes"));
	assert_eq!(SaveLocation::Subfolder.resolve().unwrap(), palettes.join(GENERATED_PALETTES_SUBFOLDER));
	assert_eq!(SaveLocation::CurrentDir.resolve().unwrap(), std::env::current_dir().unwrap());
}
