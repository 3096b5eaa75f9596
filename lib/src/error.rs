use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while converting an image to glyph art
#[derive(Error, Debug)]
pub enum RenderError {
    /// The image could not be read or parsed
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// The resize target collapsed to zero rows or columns
    #[error("invalid output dimensions {width}x{height} (source {src_width}x{src_height})")]
    InvalidDimension {
        width: u32,
        height: u32,
        src_width: u32,
        src_height: u32,
    },

    /// A palette with too few glyphs to quantize against
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// A style or color name that is not in the registry
    #[error("unknown {kind} '{name}'")]
    UnknownPreset { kind: &'static str, name: String },

    /// A configuration parameter outside its allowed range
    #[error("{field} must be between {min} and {max}, got {value}")]
    Validation {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    /// Writing the exported text failed
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RenderError>;
