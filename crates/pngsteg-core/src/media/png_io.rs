//! Indexed PNG reading and writing, directly on top of the `png` crate.
//!
//! The `image` crate resolves palettes while decoding, which loses the
//! indexed layout, so palette rasters bypass it.

use std::io::{BufRead, Seek, Write};

use log::error;
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};

use crate::error::PngStegError;
use crate::media::image::{IndexedGrid, Palette};
use crate::result::Result;

const OPAQUE: u8 = u8::MAX;
pub(crate) const MAX_PALETTE_LEN: usize = 256;

/// Decodes an indexed PNG, `None` if the PNG is not palette based.
pub(crate) fn read_indexed<R: BufRead + Seek>(reader: R) -> Result<Option<IndexedGrid<4>>> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::IDENTITY);
    let mut reader = decoder.read_info().map_err(|e| {
        error!("Error reading png header: {e}");
        PngStegError::InvalidImageMedia
    })?;

    let info = reader.info();
    if info.color_type != ColorType::Indexed {
        return Ok(None);
    }
    let Some(plte) = info.palette.as_ref().map(|p| p.to_vec()) else {
        error!("Indexed png without palette");
        return Err(PngStegError::InvalidImageMedia);
    };
    let trns = info.trns.as_ref().map(|t| t.to_vec()).unwrap_or_default();

    let mut buf = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buf).map_err(|e| {
        error!("Error decoding png frame: {e}");
        PngStegError::InvalidImageMedia
    })?;

    let (width, height) = (frame.width as usize, frame.height as usize);
    let indices = buf
        .chunks(frame.line_size)
        .take(height)
        .flat_map(|line| unpack_indices(line, frame.bit_depth, width))
        .collect();

    IndexedGrid::new(width, height, indices, palette_from_chunks(&plte, &trns))
        .map_err(|e| {
            error!("Indexed png is malformed: {e}");
            PngStegError::InvalidImageMedia
        })
        .map(Some)
}

/// Encodes an indexed raster as 8 bit palette PNG.
pub(crate) fn write_indexed<W: Write>(indexed: &IndexedGrid<4>, writer: W) -> Result<()> {
    let palette = indexed.palette();
    if palette.len() > MAX_PALETTE_LEN {
        return Err(PngStegError::PaletteOverflow {
            colors: palette.len(),
        });
    }
    let (width, height) = indexed.dimensions();
    if width == 0 || height == 0 {
        error!("Cannot store an image of {width}x{height} pixels");
        return Err(PngStegError::ImageEncodingError);
    }

    let plte: Vec<u8> = palette.colors().iter().flat_map(|c| [c[0], c[1], c[2]]).collect();
    let trns: Vec<u8> = palette.colors().iter().map(|c| c[3]).collect();

    let mut encoder = Encoder::new(writer, width as u32, height as u32);
    encoder.set_color(ColorType::Indexed);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_palette(plte);
    if trns.iter().any(|&a| a != OPAQUE) {
        encoder.set_trns(trns);
    }

    let data: Vec<u8> = indexed.indices().iter().map(|&i| i as u8).collect();
    let mut writer = encoder.write_header().map_err(|e| {
        error!("Error writing png header: {e}");
        PngStegError::ImageEncodingError
    })?;
    writer.write_image_data(&data).map_err(|e| {
        error!("Error writing png data: {e}");
        PngStegError::ImageEncodingError
    })?;
    writer.finish().map_err(|e| {
        error!("Error finishing png: {e}");
        PngStegError::ImageEncodingError
    })
}

/// builds RGBA palette entries out of `PLTE` and the optional `tRNS` alpha values
fn palette_from_chunks(plte: &[u8], trns: &[u8]) -> Palette<4> {
    Palette::new(
        plte.chunks_exact(3)
            .enumerate()
            .map(|(i, rgb)| [rgb[0], rgb[1], rgb[2], trns.get(i).copied().unwrap_or(OPAQUE)])
            .collect(),
    )
}

/// unpacks `width` indices of one scanline, sub-byte depths are stored MSB first
fn unpack_indices(line: &[u8], depth: BitDepth, width: usize) -> Vec<u32> {
    let bits = match depth {
        BitDepth::One => 1,
        BitDepth::Two => 2,
        BitDepth::Four => 4,
        _ => 8,
    };
    let per_byte = 8 / bits;
    let mask = ((1u16 << bits) - 1) as u8;

    line.iter()
        .flat_map(|&b| (0..per_byte).map(move |n| (b >> (8 - bits * (n + 1))) & mask))
        .take(width)
        .map(u32::from)
        .collect()
}
