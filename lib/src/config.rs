use crate::error::{RenderError, Result};
use crate::palette::{ColorPreset, ColorSpec, Palette, Style};
use std::ops::RangeInclusive;

pub const WIDTH_RANGE: RangeInclusive<u32> = 20..=200;
pub const BRIGHTNESS_RANGE: RangeInclusive<f32> = 0.5..=2.0;
pub const CONTRAST_RANGE: RangeInclusive<f32> = 0.5..=2.0;

/// Configuration for glyph-art conversion
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Character ramp, darkest glyph first
    pub palette: Palette,
    /// Terminal color wrapped around every row, `None` for plain text
    pub color: Option<ColorSpec>,

    /// Output columns
    pub width: u32,          // 20-200, default 100
    pub brightness: f32,     // 0.5-2.0, default 1.0
    pub contrast: f32,       // 0.5-2.0, default 1.0
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            palette: Style::default().palette(),
            color: None,

            width: 100,
            brightness: 1.0,
            contrast: 1.0,
        }
    }
}

impl RenderConfig {
    /// Builds a configuration from registry presets, rejecting out-of-range values
    pub fn new(
        style: Style,
        color: ColorPreset,
        width: u32,
        brightness: f32,
        contrast: f32,
    ) -> Result<Self> {
        let config = Self {
            palette: style.palette(),
            color: color.spec(),
            width,
            brightness,
            contrast,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !WIDTH_RANGE.contains(&self.width) {
            return Err(RenderError::Validation {
                field: "width",
                min: f64::from(*WIDTH_RANGE.start()),
                max: f64::from(*WIDTH_RANGE.end()),
                value: f64::from(self.width),
            });
        }
        check_factor("brightness", self.brightness, &BRIGHTNESS_RANGE)?;
        check_factor("contrast", self.contrast, &CONTRAST_RANGE)
    }
}

fn check_factor(field: &'static str, value: f32, range: &RangeInclusive<f32>) -> Result<()> {
    // NaN fails `contains`, so it is rejected here too
    if range.contains(&value) {
        Ok(())
    } else {
        Err(RenderError::Validation {
            field,
            min: f64::from(*range.start()),
            max: f64::from(*range.end()),
            value: f64::from(value),
        })
    }
}
