pub mod export;
pub mod ordering;
pub mod palettes;
pub mod strategies;
