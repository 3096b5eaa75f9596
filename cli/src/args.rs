//! CLI argument parsing with clap.

use clap::{Parser, ValueEnum};
use glyph_rendr::{ColorPreset, Style};
use std::path::PathBuf;

/// Convert an image into text art made of palette glyphs
#[derive(Parser, Debug)]
#[command(name = "glyph-rendr")]
#[command(version, about = "Convert images to colored text art", long_about = None)]
pub struct Args {
    /// Image to convert (JPEG, PNG, BMP, GIF, TIFF)
    #[arg(required_unless_present = "list")]
    pub image: Option<PathBuf>,

    /// Character palette
    #[arg(long, short, default_value = "detailed")]
    pub style: StyleArg,

    /// Terminal color
    #[arg(long, short, default_value = "none")]
    pub color: ColorArg,

    /// Output width in characters (20-200)
    #[arg(long, short, default_value_t = 100)]
    pub width: u32,

    /// Brightness factor (0.5-2.0)
    #[arg(long, short, default_value_t = 1.0)]
    pub brightness: f32,

    /// Contrast factor (0.5-2.0)
    #[arg(long, default_value_t = 1.0)]
    pub contrast: f32,

    /// Save the art to ascii_art_<timestamp>.txt
    #[arg(long)]
    pub save: bool,

    /// Save the art to this path
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Skip the settings summary
    #[arg(long, short)]
    pub quiet: bool,

    /// List available styles and colors
    #[arg(long)]
    pub list: bool,
}

impl Args {
    pub fn wants_export(&self) -> bool {
        self.save || self.output.is_some()
    }
}

/// Character palette preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StyleArg {
    #[default]
    Detailed,
    Blocks,
    Classic,
    Minimal,
    Dots,
    Simple,
}

impl From<StyleArg> for Style {
    fn from(s: StyleArg) -> Self {
        match s {
            StyleArg::Detailed => Style::Detailed,
            StyleArg::Blocks => Style::Blocks,
            StyleArg::Classic => Style::Classic,
            StyleArg::Minimal => Style::Minimal,
            StyleArg::Dots => Style::Dots,
            StyleArg::Simple => Style::Simple,
        }
    }
}

/// Terminal color preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorArg {
    #[default]
    None,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    White,
}

impl From<ColorArg> for ColorPreset {
    fn from(c: ColorArg) -> Self {
        match c {
            ColorArg::None => ColorPreset::None,
            ColorArg::Red => ColorPreset::Red,
            ColorArg::Green => ColorPreset::Green,
            ColorArg::Yellow => ColorPreset::Yellow,
            ColorArg::Blue => ColorPreset::Blue,
            ColorArg::Purple => ColorPreset::Purple,
            ColorArg::Cyan => ColorPreset::Cyan,
            ColorArg::White => ColorPreset::White,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["glyph-rendr", "photo.png"]).unwrap();
        assert_eq!(args.image, Some(PathBuf::from("photo.png")));
        assert_eq!(args.style, StyleArg::Detailed);
        assert_eq!(args.color, ColorArg::None);
        assert_eq!(args.width, 100);
        assert_eq!(args.brightness, 1.0);
        assert_eq!(args.contrast, 1.0);
        assert!(!args.wants_export());
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "glyph-rendr",
            "photo.png",
            "--style",
            "classic",
            "--color",
            "cyan",
            "-w",
            "60",
            "-b",
            "1.5",
            "--contrast",
            "0.8",
            "-o",
            "out.txt",
        ])
        .unwrap();
        assert_eq!(Style::from(args.style), Style::Classic);
        assert_eq!(ColorPreset::from(args.color), ColorPreset::Cyan);
        assert_eq!(args.width, 60);
        assert_eq!(args.brightness, 1.5);
        assert_eq!(args.contrast, 0.8);
        assert!(args.wants_export());
    }

    #[test]
    fn test_image_required_without_list() {
        assert!(Args::try_parse_from(["glyph-rendr"]).is_err());
        assert!(Args::try_parse_from(["glyph-rendr", "--list"]).is_ok());
    }

    #[test]
    fn test_unknown_style_rejected() {
        assert!(Args::try_parse_from(["glyph-rendr", "a.png", "--style", "fancy"]).is_err());
    }

    #[test]
    fn test_every_style_maps_to_registry() {
        for arg in StyleArg::value_variants() {
            let style = Style::from(*arg);
            assert!(Style::ALL.contains(&style));
        }
        assert_eq!(StyleArg::value_variants().len(), Style::ALL.len());
        assert_eq!(ColorArg::value_variants().len(), ColorPreset::ALL.len());
    }
}
