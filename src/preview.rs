use colored::Colorize;

use palettegen_rs::palettes::palette::{Color, Palette};

pub(crate) fn color_block(c: &Color) -> String {
	"  ".on_truecolor(c.r, c.g, c.b).to_string()
}

pub(crate) fn blocks(colors: &[Color]) -> String {
	colors.iter().map(color_block).collect()
}

pub(crate) fn print_palette(palette: &Palette, indent: &str) {
	for (i, row) in palette.row_iter().enumerate() {
		if i == 0 {
			println!("{}", blocks(row));
		} else {
			println!("{indent}{}", blocks(row));
		}
	}
}
