//! Glyph Renderer - image to text-art converter
//!
//! Converts raster images into lines of characters picked from a palette
//! ramp, with optional terminal coloring and brightness/contrast adjustment.
//!
//! # Example
//! ```no_run
//! use glyph_rendr::{ColorPreset, RenderConfig, Style, convert_file, export};
//! use std::path::Path;
//!
//! let config = RenderConfig::new(Style::Classic, ColorPreset::Green, 100, 1.0, 1.2)?;
//! let art = convert_file(Path::new("photo.jpg"), &config)?;
//! println!("{}", art.text);
//! export(&art.text, None)?;
//! # Ok::<(), glyph_rendr::RenderError>(())
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod filters;
pub mod glyphs;
pub mod palette;
pub mod processor;

// Re-export main types for convenience
pub use config::RenderConfig;
pub use error::{RenderError, Result};
pub use export::{export, strip_color_codes};
pub use glyphs::{GlyphGrid, LuminanceGrid, quantize, render};
pub use palette::{ColorPreset, ColorSpec, Palette, Style};
pub use processor::{AsciiArt, convert, convert_file, decode_image, load_image, preprocess};
