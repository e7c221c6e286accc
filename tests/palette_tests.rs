use std::fs;
use std::path::PathBuf;

use palettegen_rs::palettes::grid::GridSize;
use palettegen_rs::palettes::palette::{Color, Palette, PaletteError, PaletteFormat};

const FILE_FORMATS: [PaletteFormat; 2] = [PaletteFormat::Hex, PaletteFormat::Json];

fn fixture(name: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(format!("tests/palettes/{name}"))
}

#[test]
fn palette_parsing() {
	for palette_type in FILE_FORMATS {
		let test_file = fixture(&format!("palette.{palette_type}"));

		println!("Testing {} from file…", palette_type.to_string().to_uppercase());

		let colors = Palette::load_colors_from_file(&test_file).unwrap();
		assert_eq!(colors.len(), 64);
		assert_eq!(colors[0].to_string(), "#1E3D54");
		assert_eq!(colors[63].to_string(), "#E2EDF5");
	}
}

#[test]
fn palette_parsing_from_string() {
	for palette_type in FILE_FORMATS {
		let test_file = fixture(&format!("palette.{palette_type}"));

		println!("Testing {} from String…", palette_type.to_string().to_uppercase());

		let contents = fs::read_to_string(test_file).unwrap();
		let colors = Palette::load_colors_from_string(contents, palette_type).unwrap();
		assert_eq!(colors.len(), 64);
		assert_eq!(colors[1], Color::new(0x21, 0x40, 0x57));
	}
}

#[test]
fn both_formats_agree() {
	let hex = Palette::load_colors_from_file(fixture("palette.hex")).unwrap();
	let json = Palette::load_colors_from_file(fixture("palette.json")).unwrap();
	assert_eq!(hex, json);
}

#[test]
fn broken_hex_reports_line() {
	match Palette::load_colors_from_file(fixture("broken.hex")) {
		Err(PaletteError::InvalidTextLine { line, .. }) => assert_eq!(line, 3),
		other => panic!("unexpected result: {other:?}"),
	}
}

#[test]
fn broken_json_reports_index() {
	match Palette::load_colors_from_file(fixture("broken.json")) {
		Err(PaletteError::InvalidJsonEntry { index, .. }) => assert_eq!(index, 1),
		other => panic!("unexpected result: {other:?}"),
	}
}

#[test]
#[should_panic(expected = "InvalidFile")]
fn unknown_extension() {
	Palette::load_colors_from_file(fixture("palette.gpl")).unwrap();
}

#[test]
fn color_parsing() {
	assert_eq!("#FF8000".parse::<Color>().unwrap(), Color::new(255, 128, 0));
	assert_eq!("ff8000".parse::<Color>().unwrap(), Color::new(255, 128, 0));
	assert_eq!("0x0080ff".parse::<Color>().unwrap(), Color::new(0, 128, 255));
	assert_eq!(Color::new(10, 171, 205).to_string(), "#0AABCD");

	for bad in ["", "#FFF", "#GG0000", "#FF00000", "+12345"] {
		assert!(bad.parse::<Color>().is_err(), "{bad} should not parse");
	}
}

#[test]
fn grid_sizes() {
	assert_eq!("twister".parse::<GridSize>().unwrap(), GridSize::new(16, 4));
	assert_eq!("compact".parse::<GridSize>().unwrap(), GridSize::new(9, 3));
	assert_eq!("Square".parse::<GridSize>().unwrap(), GridSize::new(8, 8));
	assert_eq!("large".parse::<GridSize>().unwrap(), GridSize::new(16, 16));
	assert_eq!("12x5".parse::<GridSize>().unwrap(), GridSize::new(12, 5));
	assert_eq!(GridSize::new(12, 5).to_string(), "12x5");
	assert_eq!(GridSize::default().cells(), 64);

	assert_eq!("256x256".parse::<GridSize>().unwrap().cells(), 65536);

	for bad in ["0x4", "16x0", "16", "x4", "16x4x2", "huge", "257x4", "100000x100000", "5000000000x5000000000"] {
		assert!(bad.parse::<GridSize>().is_err(), "{bad} should not parse");
	}
}

#[test]
fn palette_grid_access() {
	let colors = (0..12u32).map(|i| Color::from(i * 0x010101)).collect::<Vec<Color>>();
	let pal = Palette::from_colors(GridSize::new(4, 3), colors).unwrap();

	assert_eq!(pal.rows(), 3);
	assert_eq!(pal.cols(), 4);
	assert_eq!(pal.get(1, 2), Color::new(6, 6, 6));
	assert_eq!(pal.row(2), &[Color::new(8, 8, 8), Color::new(9, 9, 9), Color::new(10, 10, 10), Color::new(11, 11, 11)]);
	assert_eq!(pal.row_iter().count(), 3);
}

#[test]
fn wrong_color_count() {
	let err = Palette::from_colors(GridSize::new(2, 2), vec![Color::BLACK; 3]).unwrap_err();
	assert_eq!(err.to_string(), "Expected 4 colors, found 3");
}

#[test]
fn padded_palettes_are_filled_with_black() {
	let pal = Palette::from_colors_padded(GridSize::new(3, 2), [Color::new(1, 2, 3), Color::new(1, 2, 3)]);
	assert_eq!(pal.len(), 6);
	assert_eq!(pal.unique_colors(), vec![Color::new(1, 2, 3), Color::BLACK]);
	assert_eq!(pal.hex_codes()[5], "#000000");
}
