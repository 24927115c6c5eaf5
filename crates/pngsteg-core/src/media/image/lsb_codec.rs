use std::io::{Read, Write};
use std::slice::{Iter, IterMut};

use enum_dispatch::enum_dispatch;
use log::debug;

use super::grid::PixelGrid;
use super::nibbles::{low_nibble, merge_nibbles, replace_low_nibble, split_nibbles};
use crate::error::PngStegError;
use crate::result::Result;

/// Rows a [`Scheme::TruncatedNibble`] carrier keeps when it is written out.
pub const TRUNCATED_OUTPUT_ROWS: usize = 30;

/// The bit layout used to place one message byte into one pixel.
///
/// Every scheme stores exactly one byte per pixel and walks the raster
/// row-major, so the capacity is always `width * height` bytes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Scheme A: the high nibble replaces the whole red channel, the low
    /// nibble the whole green channel. Blue and alpha stay untouched.
    #[default]
    Nibble,
    /// Scheme B: like [`Scheme::Nibble`] but only the low 4 bits of red and
    /// green are replaced. The carrier is stored as an indexed raster again.
    PaletteNibble,
    /// Scheme C: channel `n` carries bits `2n` and `2n + 1` of the byte in its
    /// 2 least significant bits. Needs all 4 channels.
    Spread,
    /// Scheme D: identical to [`Scheme::Nibble`], but only the first
    /// [`TRUNCATED_OUTPUT_ROWS`] rows of the carrier are written out.
    TruncatedNibble,
}

impl Scheme {
    /// number of color channels a pixel needs to carry a byte in this scheme
    pub fn channels_needed(&self) -> usize {
        match self {
            Scheme::Nibble | Scheme::PaletteNibble | Scheme::TruncatedNibble => 2,
            Scheme::Spread => 4,
        }
    }

    /// the height of the raster that gets persisted for a carrier of `height` rows
    pub fn output_height(&self, height: usize) -> usize {
        match self {
            Scheme::TruncatedNibble => height.min(TRUNCATED_OUTPUT_ROWS),
            _ => height,
        }
    }

    /// true if the carrier goes back into an indexed raster after hiding
    pub fn is_indexed_output(&self) -> bool {
        matches!(self, Scheme::PaletteNibble)
    }

    fn concealer(&self) -> Concealers {
        match self {
            Scheme::Nibble | Scheme::TruncatedNibble => NibbleOverwrite.into(),
            Scheme::PaletteNibble => NibbleInLowBits.into(),
            Scheme::Spread => TwoBitSpread.into(),
        }
    }

    fn ensure_channels(&self, channels: usize) -> Result<()> {
        if channels < self.channels_needed() {
            return Err(PngStegError::UnsupportedChannelCount {
                scheme: *self,
                channels,
            });
        }

        Ok(())
    }
}

/// Places one byte into the channels of one pixel and gets it back out.
#[enum_dispatch]
pub trait Concealer {
    fn hide(&self, pixel: &mut [u8], byte: u8);
    fn unveil(&self, pixel: &[u8]) -> u8;
}

/// Overwrites red and green with the bare nibbles.
///
/// Reading masks the low nibbles, which works because the overwritten
/// channels have their upper 4 bits cleared.
pub struct NibbleOverwrite;

impl Concealer for NibbleOverwrite {
    #[inline(always)]
    fn hide(&self, pixel: &mut [u8], byte: u8) {
        let (high, low) = split_nibbles(byte);
        pixel[0] = high;
        pixel[1] = low;
    }

    #[inline(always)]
    fn unveil(&self, pixel: &[u8]) -> u8 {
        merge_nibbles(low_nibble(pixel[0]), low_nibble(pixel[1]))
    }
}

/// Replaces only the low nibbles of red and green.
pub struct NibbleInLowBits;

impl Concealer for NibbleInLowBits {
    #[inline(always)]
    fn hide(&self, pixel: &mut [u8], byte: u8) {
        let (high, low) = split_nibbles(byte);
        pixel[0] = replace_low_nibble(pixel[0], high);
        pixel[1] = replace_low_nibble(pixel[1], low);
    }

    #[inline(always)]
    fn unveil(&self, pixel: &[u8]) -> u8 {
        merge_nibbles(low_nibble(pixel[0]), low_nibble(pixel[1]))
    }
}

/// Spreads the byte over 4 channels, 2 bits each, lowest bits into red.
pub struct TwoBitSpread;

const TWO_BITS: u8 = 0b11;

impl Concealer for TwoBitSpread {
    #[inline(always)]
    fn hide(&self, pixel: &mut [u8], byte: u8) {
        for (n, channel) in pixel.iter_mut().take(4).enumerate() {
            *channel = (*channel & !TWO_BITS) | ((byte >> (2 * n)) & TWO_BITS);
        }
    }

    #[inline(always)]
    fn unveil(&self, pixel: &[u8]) -> u8 {
        pixel
            .iter()
            .take(4)
            .enumerate()
            .fold(0, |byte, (n, channel)| byte | ((channel & TWO_BITS) << (2 * n)))
    }
}

#[enum_dispatch(Concealer)]
pub enum Concealers {
    NibbleOverwrite,
    NibbleInLowBits,
    TwoBitSpread,
}

/// Writes one byte per pixel, row-major, until the grid runs out of pixels.
///
/// A write that finds no pixel left returns `Ok(0)`, so `write_all` fails with
/// [`std::io::ErrorKind::WriteZero`] once the capacity is exhausted.
pub struct LsbEncoder<'i, const C: usize> {
    pixels: IterMut<'i, [u8; C]>,
    concealer: Concealers,
}

impl<const C: usize> Write for LsbEncoder<'_, C> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut written = 0;
        for (byte, pixel) in buf.iter().zip(self.pixels.by_ref()) {
            self.concealer.hide(&mut pixel[..], *byte);
            written += 1;
        }

        Ok(written)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Reads one byte per pixel, row-major, until the grid is fully scanned.
///
/// There is no length marker, everything after the hidden message is noise
/// from the carrier.
pub struct LsbDecoder<'i, const C: usize> {
    pixels: Iter<'i, [u8; C]>,
    concealer: Concealers,
}

impl<const C: usize> Read for LsbDecoder<'_, C> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let mut read = 0;
        for (byte, pixel) in buf.iter_mut().zip(self.pixels.by_ref()) {
            *byte = self.concealer.unveil(&pixel[..]);
            read += 1;
        }

        Ok(read)
    }
}

/// Factory for decoder and encoder
pub struct LsbCodec;

impl LsbCodec {
    /// builds a LSB Image Decoder that implements Read
    pub fn decoder<'i, const C: usize>(
        input: &'i PixelGrid<C>,
        scheme: Scheme,
    ) -> Result<LsbDecoder<'i, C>> {
        scheme.ensure_channels(C)?;

        Ok(LsbDecoder {
            pixels: input.pixels().iter(),
            concealer: scheme.concealer(),
        })
    }

    /// builds a LSB Image Encoder that implements Write
    pub fn encoder<'i, const C: usize>(
        carrier: &'i mut PixelGrid<C>,
        scheme: Scheme,
    ) -> Result<LsbEncoder<'i, C>> {
        scheme.ensure_channels(C)?;

        Ok(LsbEncoder {
            pixels: carrier.pixels_mut().iter_mut(),
            concealer: scheme.concealer(),
        })
    }
}

/// Hides `message` in a copy of `pixels`, one byte per pixel.
///
/// Fails without touching anything when the message needs more pixels than
/// the grid has. Pixels past the end of the message are left as they are.
pub fn encode<const C: usize>(
    pixels: &PixelGrid<C>,
    message: &[u8],
    scheme: Scheme,
) -> Result<PixelGrid<C>> {
    scheme.ensure_channels(C)?;
    let available_pixels = pixels.capacity();
    if message.len() > available_pixels {
        return Err(PngStegError::CapacityExceeded {
            required_pixels: message.len(),
            available_pixels,
        });
    }
    debug!(
        "hiding {} bytes in {} pixels with {scheme:?}",
        message.len(),
        available_pixels
    );

    let mut carrier = pixels.clone();
    LsbCodec::encoder(&mut carrier, scheme)?.write_all(message)?;

    Ok(carrier)
}

/// Reads one byte from every pixel of the grid, `width * height` bytes in total.
///
/// Only fails if the grid has too few channels for the scheme, any channel
/// content decodes to some byte.
pub fn decode<const C: usize>(pixels: &PixelGrid<C>, scheme: Scheme) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(pixels.capacity());
    LsbCodec::decoder(pixels, scheme)?.read_to_end(&mut buf)?;

    Ok(buf)
}
