use crate::config::RenderConfig;
use crate::error::{RenderError, Result};
use crate::filters::{adjust_brightness, adjust_contrast, calculate_luminance, resample};
use crate::glyphs::{GlyphGrid, LuminanceGrid, quantize, render};
use image::DynamicImage;
use log::debug;
use std::path::Path;

/// Terminal cells are roughly 1.65 times taller than they are wide
pub const CELL_ASPECT: f64 = 1.65;

/// Glyph art produced by [`convert`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiArt {
    pub glyphs: GlyphGrid,
    /// Rendered text, including color codes when a color was configured
    pub text: String,
}

impl AsciiArt {
    /// The same art without any color codes
    pub fn plain_text(&self) -> String {
        render(&self.glyphs, None)
    }
}

/// Open and decode an image file
///
/// JPEG, PNG, BMP, GIF and TIFF are supported. Missing files and corrupt data
/// both surface as [`RenderError::Decode`].
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let image = image::open(path)?;
    debug!(
        "decoded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Decode an image held in memory
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    Ok(image::load_from_memory(bytes)?)
}

/// Size of the glyph grid for a source image
///
/// Height is `round(width * (src_height / src_width) / 1.65)`.
///
/// # Returns
/// `(width, height)`, or [`RenderError::InvalidDimension`] when either side
/// comes out as zero
pub fn output_dimensions(src_width: u32, src_height: u32, width: u32) -> Result<(u32, u32)> {
    let invalid = |height: u32| RenderError::InvalidDimension {
        width,
        height,
        src_width,
        src_height,
    };

    if src_width == 0 || src_height == 0 || width == 0 {
        return Err(invalid(0));
    }

    let ratio = f64::from(src_height) / f64::from(src_width) / CELL_ASPECT;
    let height = (f64::from(width) * ratio).round();
    if height < 1.0 {
        return Err(invalid(0));
    }
    if height > f64::from(u32::MAX) {
        return Err(invalid(u32::MAX));
    }

    Ok((width, height as u32))
}

/// Turn a decoded image into a luminance grid
///
/// 1. Scale brightness (skipped at 1.0)
/// 2. Stretch contrast around mid-gray (skipped at 1.0)
/// 3. Convert to ITU-R 601 luma
/// 4. Resample to `config.width` columns with the cell aspect correction
pub fn preprocess(image: &DynamicImage, config: &RenderConfig) -> Result<LuminanceGrid> {
    config.validate()?;

    let (width, height) = output_dimensions(image.width(), image.height(), config.width)?;

    // Step 1-2: enhancement works on color, before luma conversion
    let mut rgb = image.to_rgb8();
    if config.brightness != 1.0 {
        rgb = adjust_brightness(&rgb, config.brightness);
    }
    if config.contrast != 1.0 {
        rgb = adjust_contrast(&rgb, config.contrast);
    }

    // Step 3: luminance
    let lum = calculate_luminance(&rgb);

    // Step 4: aspect-corrected resize
    let resized = resample(&lum, width, height);
    debug!(
        "preprocessed {}x{} -> {}x{}",
        image.width(),
        image.height(),
        width,
        height
    );

    Ok(LuminanceGrid::new(resized))
}

/// Convert an image to glyph art
///
/// Runs preprocessing, quantizes against `config.palette` and renders the
/// rows, wrapping them in `config.color` when set.
pub fn convert(image: &DynamicImage, config: &RenderConfig) -> Result<AsciiArt> {
    let grid = preprocess(image, config)?;
    let glyphs = quantize(&grid, &config.palette);
    let text = render(&glyphs, config.color.as_ref());
    Ok(AsciiArt { glyphs, text })
}

/// Load an image file and convert it to glyph art
pub fn convert_file(path: &Path, config: &RenderConfig) -> Result<AsciiArt> {
    config.validate()?;
    let image = load_image(path)?;
    convert(&image, config)
}
