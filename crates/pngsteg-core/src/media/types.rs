use std::fs::File;
use std::io::{BufReader, Cursor, Seek, SeekFrom, Write};
use std::path::Path;

use image::RgbaImage;
use log::{debug, error, warn};

use super::image::{collapse, decode, encode, expand, IndexedGrid, RgbaGrid, Scheme};
use super::png_io::{read_indexed, write_indexed, MAX_PALETTE_LEN};
use super::Persist;
use crate::error::PngStegError;
use crate::result::Result;

/// a media container for steganography
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Media {
    /// direct color raster, normalized to 8 bit RGBA
    Image(RgbaGrid),
    /// palette based raster
    Indexed(IndexedGrid<4>),
}

impl Media {
    pub fn from_image(img: RgbaImage) -> Self {
        Self::Image(img.into())
    }

    pub fn from_grid(grid: RgbaGrid) -> Self {
        Self::Image(grid)
    }

    pub fn from_indexed(indexed: IndexedGrid<4>) -> Self {
        Self::Indexed(indexed)
    }

    pub fn from_file(f: &Path) -> Result<Self> {
        let is_png = f
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("png"))
            .unwrap_or(false);
        if !is_png {
            return Err(PngStegError::UnsupportedMedia);
        }

        let file = File::open(f).map_err(|e| {
            error!("Error opening file {f:?}: {e}");
            PngStegError::InvalidImageMedia
        })?;
        let mut reader = BufReader::new(file);
        if let Some(indexed) = read_indexed(&mut reader)? {
            debug!("{f:?} is an indexed png with {} colors", indexed.palette().len());
            return Ok(Self::Indexed(indexed));
        }

        reader.seek(SeekFrom::Start(0))?;
        let img = image::load(reader, image::ImageFormat::Png)
            .map_err(|e| {
                error!("Error decoding image {f:?}: {e}");
                PngStegError::InvalidImageMedia
            })?
            .to_rgba8();

        Ok(Self::from_image(img))
    }

    pub fn dimensions(&self) -> (usize, usize) {
        match self {
            Media::Image(grid) => grid.dimensions(),
            Media::Indexed(indexed) => indexed.dimensions(),
        }
    }

    /// number of message bytes this media can carry
    pub fn capacity(&self) -> usize {
        let (width, height) = self.dimensions();
        width * height
    }

    /// the media as explicit RGBA pixels, palettes get resolved
    pub fn to_pixel_grid(&self) -> RgbaGrid {
        match self {
            Media::Image(grid) => grid.clone(),
            Media::Indexed(indexed) => expand(indexed),
        }
    }

    /// Hides `msg_data` and turns the media into what the scheme stores:
    /// an indexed raster for [`Scheme::PaletteNibble`], truncated rows for
    /// [`Scheme::TruncatedNibble`], full RGBA otherwise.
    ///
    /// On error the media stays unchanged.
    pub fn hide_data(&mut self, msg_data: &[u8], scheme: Scheme) -> Result<&mut Self> {
        let mut encoded = encode(&self.to_pixel_grid(), msg_data, scheme)?;

        let output_height = scheme.output_height(encoded.height());
        if output_height < encoded.height() {
            let kept = encoded.width() * output_height;
            if msg_data.len() > kept {
                warn!(
                    "Only {kept} of {} message bytes fit into the first {output_height} rows that are kept",
                    msg_data.len()
                );
            }
            encoded.truncate_rows(output_height);
        }

        *self = if scheme.is_indexed_output() {
            let indexed = collapse(&encoded);
            if indexed.palette().len() > MAX_PALETTE_LEN {
                return Err(PngStegError::PaletteOverflow {
                    colors: indexed.palette().len(),
                });
            }
            Media::Indexed(indexed)
        } else {
            Media::Image(encoded)
        };

        Ok(self)
    }

    /// every byte the scheme finds in the media, `width * height` of them
    pub fn unveil_data(&self, scheme: Scheme) -> Result<Vec<u8>> {
        decode(&self.to_pixel_grid(), scheme)
    }
}

impl Persist for Media {
    /// the png is encoded in memory first, the file is only created once that worked
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let mut png = Cursor::new(Vec::new());
        self.save_to_writer(&mut png)?;

        std::fs::write(file, png.into_inner()).map_err(|e| {
            error!("Error writing file {file:?}: {e}");
            PngStegError::WriteError { source: e }
        })
    }
}

impl Media {
    pub fn save_to_writer<W: Write + Seek>(&mut self, mut writer: W) -> Result<()> {
        match self {
            Media::Image(grid) => {
                let img = RgbaImage::try_from(&*grid)?;
                img.write_to(&mut writer, image::ImageFormat::Png)
                    .map_err(|e| {
                        error!("Error saving image: {e}");
                        PngStegError::ImageEncodingError
                    })?;
            }
            Media::Indexed(indexed) => write_indexed(indexed, &mut writer)?,
        }

        writer
            .flush()
            .map_err(|source| PngStegError::WriteError { source })
    }
}
