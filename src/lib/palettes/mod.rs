pub mod catalog;
pub mod color_space;
pub mod grid;
pub(crate) mod pal_hex;
pub(crate) mod pal_json;
pub mod palette;
