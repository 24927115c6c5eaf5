//! Converting between indexed-color rasters and explicit channel tuples.

use std::collections::HashMap;

use super::grid::PixelGrid;
use crate::error::PngStegError;
use crate::result::Result;

/// Ordered colors of an indexed raster.
///
/// Palettes built by [`collapse`] hold every color exactly once, in the order
/// the colors first appear in the source grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette<const C: usize> {
    colors: Vec<[u8; C]>,
}

impl<const C: usize> Palette<C> {
    pub fn new(colors: Vec<[u8; C]>) -> Self {
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[[u8; C]] {
        &self.colors
    }
}

/// A raster of palette indices together with its palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedGrid<const C: usize> {
    width: usize,
    height: usize,
    indices: Vec<u32>,
    palette: Palette<C>,
}

impl<const C: usize> IndexedGrid<C> {
    /// checks that the indices fill a `width * height` raster and all point into `palette`
    pub fn new(
        width: usize,
        height: usize,
        indices: Vec<u32>,
        palette: Palette<C>,
    ) -> Result<Self> {
        if indices.len() != width * height {
            return Err(PngStegError::NonRectangularGrid {
                row: indices.len() / width.max(1),
                expected: width,
                actual: indices.len() % width.max(1),
            });
        }
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= palette.len()) {
            return Err(PngStegError::InvalidPaletteIndex {
                index: index as usize,
                palette_len: palette.len(),
            });
        }

        Ok(Self {
            width,
            height,
            indices,
            palette,
        })
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

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn palette(&self) -> &Palette<C> {
        &self.palette
    }
}

/// Resolves every index to its palette color, the result has the same shape.
///
/// # Panics
/// when an index is outside of the palette, [`IndexedGrid::new`] rules that out.
pub fn expand<const C: usize>(indexed: &IndexedGrid<C>) -> PixelGrid<C> {
    let colors = indexed.palette.colors();
    let pixels = indexed
        .indices
        .iter()
        .map(|&i| {
            *colors.get(i as usize).unwrap_or_else(|| {
                panic!("palette index {i} out of bounds for {} colors", colors.len())
            })
        })
        .collect();

    match PixelGrid::from_pixels(indexed.width, indexed.height, pixels) {
        Ok(grid) => grid,
        Err(e) => unreachable!("indexed grid lost its shape: {e}"),
    }
}

/// Builds a palette of the distinct colors in first-seen, row-major order and
/// expresses every pixel as an index into it.
pub fn collapse<const C: usize>(pixels: &PixelGrid<C>) -> IndexedGrid<C> {
    let mut colors = Vec::new();
    let mut seen: HashMap<[u8; C], u32> = HashMap::new();

    let indices = pixels
        .pixels()
        .iter()
        .map(|pixel| {
            *seen.entry(*pixel).or_insert_with(|| {
                colors.push(*pixel);
                (colors.len() - 1) as u32
            })
        })
        .collect();

    IndexedGrid {
        width: pixels.width(),
        height: pixels.height(),
        indices,
        palette: Palette::new(colors),
    }
}
