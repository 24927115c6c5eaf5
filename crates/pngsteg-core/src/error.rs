use thiserror::Error;

use crate::media::image::Scheme;

#[derive(Error, Debug)]
pub enum PngStegError {
    /// Represents an unsupported carrier media. For example, a JPEG or a WAV file
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// The message needs more pixels than the carrier has, nothing was written
    #[error(
        "Capacity Error: the message needs {required_pixels} pixels but the image only has {available_pixels}"
    )]
    CapacityExceeded {
        required_pixels: usize,
        available_pixels: usize,
    },

    /// The scheme stores bits in more channels than the pixels carry
    #[error("Scheme {scheme:?} cannot be used with {channels} color channels per pixel")]
    UnsupportedChannelCount { scheme: Scheme, channels: usize },

    /// Rows of a pixel grid must all have the same length
    #[error("Row {row} has {actual} pixels, expected {expected}")]
    NonRectangularGrid {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// An index points outside of its palette
    #[error("Palette index {index} is out of bounds for a palette of {palette_len} colors")]
    InvalidPaletteIndex { index: usize, palette_len: usize },

    /// An indexed PNG can hold at most 256 palette entries
    #[error("{colors} distinct colors do not fit into an indexed PNG palette")]
    PaletteOverflow { colors: usize },

    /// A value that was supposed to be a byte is not
    #[error("Value {value} does not fit into a byte")]
    InvalidByteValue { value: u32 },

    /// A value that was supposed to be a nibble is not
    #[error("Nibbles {high:#x} and {low:#x} are not both 4 bit values")]
    InvalidNibbleValue { high: u8, low: u8 },

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,
}
