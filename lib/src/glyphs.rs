//! Luminance quantization and text layout
//!
//! [`quantize`] maps every luminance sample to a palette glyph and [`render`]
//! lays the glyphs out as lines of text, optionally wrapping each line in a
//! terminal color.

use crate::palette::{ColorSpec, Palette};
use image::GrayImage;
use rayon::prelude::*;

/// Single-channel brightness samples in [0, 255], row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuminanceGrid {
    image: GrayImage,
}

impl LuminanceGrid {
    pub fn new(image: GrayImage) -> Self {
        Self { image }
    }

    /// Build a grid from raw samples; `None` if the length does not match
    pub fn from_raw(width: u32, height: u32, samples: Vec<u8>) -> Option<Self> {
        GrayImage::from_raw(width, height, samples).map(Self::new)
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.image.get_pixel(x, y)[0]
    }

    pub fn samples(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn as_image(&self) -> &GrayImage {
        &self.image
    }
}

/// Characters laid out on the same grid as the luminance they came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphGrid {
    width: u32,
    height: u32,
    cells: Vec<char>,
}

impl GlyphGrid {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn get(&self, x: u32, y: u32) -> char {
        self.cells[(y * self.width + x) as usize]
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.width.max(1) as usize)
    }
}

/// Replace every luminance sample with its palette glyph
///
/// The index of a sample `v` in a palette of `N` glyphs is
/// `floor(v * (N - 1) / 255)`, see [`Palette::index_for`].
pub fn quantize(grid: &LuminanceGrid, palette: &Palette) -> GlyphGrid {
    let cells = grid
        .samples()
        .par_iter()
        .map(|&v| palette.glyph_for(v))
        .collect();

    GlyphGrid {
        width: grid.width(),
        height: grid.height(),
        cells,
    }
}

/// Lay out a glyph grid as text
///
/// Rows are joined with `\n` and there is no trailing newline. With a
/// [`ColorSpec`] each row is wrapped in its start and reset codes, so the color never
/// bleeds across lines.
pub fn render(glyphs: &GlyphGrid, color: Option<&ColorSpec>) -> String {
    let lines: Vec<String> = glyphs
        .rows()
        .map(|row| {
            let line: String = row.iter().collect();
            match color {
                Some(spec) => format!("{}{}{}", spec.start, line, spec.reset),
                None => line,
            }
        })
        .collect();

    lines.join("\n")
}
