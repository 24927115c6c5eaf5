//! Bit twiddling on single color channels.
//!
//! The unchecked functions are used on the hot path of the codec, where every
//! value comes out of an 8 bit channel and is in range by construction. The
//! `checked_*` variants are meant for values coming from somewhere else.

use crate::error::PngStegError;
use crate::result::Result;

const LOW_NIBBLE: u8 = 0b0000_1111;
const HIGH_NIBBLE: u8 = 0b1111_0000;

/// splits a byte into its high and low nibble
///
/// ```rust
/// use pngsteg_core::media::image::nibbles::split_nibbles;
///
/// assert_eq!(split_nibbles(0b1010_0101), (0b1010, 0b0101));
/// ```
#[inline(always)]
pub fn split_nibbles(byte: u8) -> (u8, u8) {
    ((byte >> 4) & LOW_NIBBLE, byte & LOW_NIBBLE)
}

/// like [`split_nibbles`] but for values that are not known to be a byte
pub fn checked_split_nibbles(value: u32) -> Result<(u8, u8)> {
    let byte = u8::try_from(value).map_err(|_| PngStegError::InvalidByteValue { value })?;

    Ok(split_nibbles(byte))
}

/// concatenates two nibbles into one byte, the inverse of [`split_nibbles`]
///
/// ```rust
/// use pngsteg_core::media::image::nibbles::merge_nibbles;
///
/// assert_eq!(merge_nibbles(0b1010, 0b0101), 0b1010_0101);
/// ```
#[inline(always)]
pub fn merge_nibbles(high: u8, low: u8) -> u8 {
    debug_assert!(
        high <= LOW_NIBBLE && low <= LOW_NIBBLE,
        "nibbles out of range: {high:#x}, {low:#x}"
    );
    (high << 4) | low
}

/// like [`merge_nibbles`] but reports values wider than 4 bits
pub fn checked_merge_nibbles(high: u8, low: u8) -> Result<u8> {
    if high > LOW_NIBBLE || low > LOW_NIBBLE {
        return Err(PngStegError::InvalidNibbleValue { high, low });
    }

    Ok(merge_nibbles(high, low))
}

/// keeps the upper 4 bits of a channel and puts `nibble` into the lower 4 bits
///
/// ```rust
/// use pngsteg_core::media::image::nibbles::replace_low_nibble;
///
/// assert_eq!(replace_low_nibble(0b1010_0101, 0b1100), 0b1010_1100);
/// ```
#[inline(always)]
pub fn replace_low_nibble(channel: u8, nibble: u8) -> u8 {
    debug_assert!(nibble <= LOW_NIBBLE, "nibble out of range: {nibble:#x}");
    (channel & HIGH_NIBBLE) | nibble
}

/// the low nibble of a channel, that is where all nibble schemes keep their data
#[inline(always)]
pub fn low_nibble(channel: u8) -> u8 {
    split_nibbles(channel).1
}
