pub mod palettes;
