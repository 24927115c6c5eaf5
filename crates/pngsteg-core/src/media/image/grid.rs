use std::slice::ChunksExact;

use image::{ImageBuffer, Pixel, Rgb, RgbImage, Rgba, RgbaImage};

use crate::error::PngStegError;
use crate::result::Result;

/// A rectangular raster of pixels with `C` 8 bit channels each (RGB or RGBA).
///
/// Pixels are kept row-major in one flat buffer, so every row has the same
/// length by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid<const C: usize> {
    width: usize,
    height: usize,
    pixels: Vec<[u8; C]>,
}

pub type RgbGrid = PixelGrid<3>;
pub type RgbaGrid = PixelGrid<4>;

impl<const C: usize> PixelGrid<C> {
    /// a grid of `width * height` copies of `fill`
    pub fn new(width: usize, height: usize, fill: [u8; C]) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    /// builds a grid out of a flat, row-major pixel buffer
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<[u8; C]>) -> Result<Self> {
        if pixels.len() != width * height {
            return Err(PngStegError::NonRectangularGrid {
                row: pixels.len() / width.max(1),
                expected: width,
                actual: pixels.len() % width.max(1),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// builds a grid out of nested rows, all rows must have the same length
    pub fn from_rows(rows: Vec<Vec<[u8; C]>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or_default();
        let mut pixels = Vec::with_capacity(width * height);

        for (row, r) in rows.into_iter().enumerate() {
            if r.len() != width {
                return Err(PngStegError::NonRectangularGrid {
                    row,
                    expected: width,
                    actual: r.len(),
                });
            }
            pixels.extend(r);
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// builds a grid out of interleaved channel rows, `[r, g, b, a, r, g, b, a, ..]`
    pub fn from_channel_rows(rows: &[Vec<u8>]) -> Result<Self> {
        let rows = rows
            .iter()
            .enumerate()
            .map(|(row, r)| {
                if r.len() % C != 0 {
                    return Err(PngStegError::NonRectangularGrid {
                        row,
                        expected: r.len() / C * C + C,
                        actual: r.len(),
                    });
                }
                Ok(r.chunks_exact(C)
                    .map(|c| {
                        let mut p = [0; C];
                        p.copy_from_slice(c);
                        p
                    })
                    .collect())
            })
            .collect::<Result<Vec<Vec<[u8; C]>>>>()?;

        Self::from_rows(rows)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// number of pixels, one message byte fits into each of them
    pub fn capacity(&self) -> usize {
        self.pixels.len()
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<&[u8; C]> {
        if x >= self.width {
            return None;
        }
        self.pixels.get(y * self.width + x)
    }

    pub fn pixels(&self) -> &[[u8; C]] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [[u8; C]] {
        &mut self.pixels
    }

    pub fn rows(&self) -> ChunksExact<'_, [u8; C]> {
        self.pixels.chunks_exact(self.width.max(1))
    }

    /// the rows as interleaved channel values, the layout raster codecs usually hand out
    pub fn to_channel_rows(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|r| r.iter().flatten().copied().collect())
            .collect()
    }

    /// drops every row from `height` on, does nothing when the grid is not higher than that
    pub fn truncate_rows(&mut self, height: usize) {
        if height < self.height {
            self.height = height;
            self.pixels.truncate(height * self.width);
        }
    }
}

fn from_image_buffer<P, const C: usize>(img: &ImageBuffer<P, Vec<u8>>) -> PixelGrid<C>
where
    P: Pixel<Subpixel = u8>,
{
    let (width, height) = img.dimensions();
    PixelGrid {
        width: width as usize,
        height: height as usize,
        pixels: img
            .pixels()
            .map(|p| {
                let mut px = [0; C];
                px.copy_from_slice(p.channels());
                px
            })
            .collect(),
    }
}

fn into_image_buffer<P, const C: usize>(grid: &PixelGrid<C>) -> Option<ImageBuffer<P, Vec<u8>>>
where
    P: Pixel<Subpixel = u8>,
{
    let raw: Vec<u8> = grid.pixels.iter().flatten().copied().collect();
    ImageBuffer::from_raw(grid.width as u32, grid.height as u32, raw)
}

impl From<&RgbaImage> for RgbaGrid {
    fn from(img: &RgbaImage) -> Self {
        from_image_buffer::<Rgba<u8>, 4>(img)
    }
}

impl From<RgbaImage> for RgbaGrid {
    fn from(img: RgbaImage) -> Self {
        Self::from(&img)
    }
}

impl From<&RgbImage> for RgbGrid {
    fn from(img: &RgbImage) -> Self {
        from_image_buffer::<Rgb<u8>, 3>(img)
    }
}

impl From<RgbImage> for RgbGrid {
    fn from(img: RgbImage) -> Self {
        Self::from(&img)
    }
}

impl TryFrom<&RgbaGrid> for RgbaImage {
    type Error = PngStegError;

    fn try_from(grid: &RgbaGrid) -> Result<Self> {
        into_image_buffer(grid).ok_or(PngStegError::ImageEncodingError)
    }
}

impl TryFrom<&RgbGrid> for RgbImage {
    type Error = PngStegError;

    fn try_from(grid: &RgbGrid) -> Result<Self> {
        into_image_buffer(grid).ok_or(PngStegError::ImageEncodingError)
    }
}
