pub mod grid;
pub mod lsb_codec;
pub mod nibbles;
pub mod palette;

pub use grid::{PixelGrid, RgbGrid, RgbaGrid};
pub use lsb_codec::{decode, encode, LsbCodec, Scheme, TRUNCATED_OUTPUT_ROWS};
pub use palette::{collapse, expand, IndexedGrid, Palette};
