use std::fmt::{Display, Formatter};

use crate::palettes::palette::Palette;

pub mod hilbert;
pub mod hue_saturation;
pub mod maximin;

#[derive(clap::ValueEnum, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum Arrangement {
	/// Keep the order the strategy produced.
	#[default] AsGenerated,
	/// Sort each row by hue, then saturation.
	Rows,
	/// Sort the whole grid by hue, then saturation.
	HueSaturation,
	/// Sort the whole grid along a Hilbert curve over chromaticity.
	Hilbert,
}

impl Display for Arrangement {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Arrangement::AsGenerated => write!(f, "as-generated"),
			Arrangement::Rows => write!(f, "rows"),
			Arrangement::HueSaturation => write!(f, "hue-saturation"),
			Arrangement::Hilbert => write!(f, "hilbert"),
		}
	}
}

pub fn arrange(palette: &mut Palette, arrangement: Arrangement, hilbert_order: u32) {
	match arrangement {
		Arrangement::AsGenerated => {}
		Arrangement::Rows => hue_saturation::sort_rows(palette),
		// whole-grid sorts drop repeated colors and pad the tail with black
		Arrangement::HueSaturation => {
			let sorted = hue_saturation::sort_by_hue_saturation(palette.colors());
			*palette = Palette::from_colors_padded(palette.size(), sorted);
		}
		Arrangement::Hilbert => {
			let sorted = hilbert::sort_by_hilbert(palette.colors(), hilbert_order);
			*palette = Palette::from_colors_padded(palette.size(), sorted);
		}
	}
}
