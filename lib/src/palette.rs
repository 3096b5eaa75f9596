//! Character palettes and terminal color presets
//!
//! Both registries are fixed tables. A [`Style`] names a character ramp and a
//! [`ColorPreset`] names an ANSI foreground code; neither is mutated after
//! startup.

use crate::error::{RenderError, Result};
use std::fmt;
use std::str::FromStr;

/// ANSI sequence that restores the default terminal color
pub const RESET_CODE: &str = "\x1b[0m";

/// An ordered character ramp
///
/// Index 0 is used for the darkest luminance, the last glyph for the
/// brightest. A palette always holds at least two glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    glyphs: Vec<char>,
}

impl Palette {
    /// Build a palette from a string of glyphs, darkest first
    pub fn new(glyphs: &str) -> Result<Self> {
        let glyphs: Vec<char> = glyphs.chars().collect();
        if glyphs.len() < 2 {
            return Err(RenderError::InvalidPalette(format!(
                "a palette needs at least 2 glyphs, got {}",
                glyphs.len()
            )));
        }
        Ok(Self { glyphs })
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// `false` for every constructed palette
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Palette index for a luminance sample
    ///
    /// `floor(v * (N - 1) / 255)`, evaluated in integer arithmetic so the
    /// bucketing is exact.
    #[inline]
    pub fn index_for(&self, luminance: u8) -> usize {
        let last = self.glyphs.len() - 1;
        (luminance as usize * last / 255).min(last)
    }

    #[inline]
    pub fn glyph_for(&self, luminance: u8) -> char {
        self.glyphs[self.index_for(luminance)]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Style::default().palette()
    }
}

impl From<Style> for Palette {
    fn from(style: Style) -> Self {
        style.palette()
    }
}

/// Named character ramp presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    #[default]
    Detailed,
    Blocks,
    Classic,
    Minimal,
    Dots,
    Simple,
}

impl Style {
    /// Every preset, in menu order
    pub const ALL: [Style; 6] = [
        Style::Detailed,
        Style::Blocks,
        Style::Classic,
        Style::Minimal,
        Style::Dots,
        Style::Simple,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Style::Detailed => "Detailed",
            Style::Blocks => "Blocks",
            Style::Classic => "Classic",
            Style::Minimal => "Minimal",
            Style::Dots => "Dots",
            Style::Simple => "Simple",
        }
    }

    pub fn chars(self) -> &'static str {
        match self {
            Style::Detailed => "@%#*+=-:. ",
            Style::Blocks => "█▉▊▋▌▍▎▏ ",
            Style::Classic => "@#S%?*+;:,.",
            Style::Minimal => "██▓▒░  ",
            Style::Dots => "●◐◑◒◓◔◕○ ",
            Style::Simple => "█▓▒░ ",
        }
    }

    /// The first few glyphs followed by an ellipsis, for menus
    pub fn preview(self) -> String {
        let head: String = self.chars().chars().take(5).collect();
        format!("{head}...")
    }

    pub fn palette(self) -> Palette {
        Palette {
            glyphs: self.chars().chars().collect(),
        }
    }

    /// 1-based position in [`Style::ALL`]
    pub fn number(self) -> usize {
        Style::ALL.iter().position(|s| *s == self).unwrap_or(0) + 1
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = RenderError;

    /// Accepts a preset name (any case) or its menu number
    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        Style::ALL
            .into_iter()
            .find(|style| {
                style.name().eq_ignore_ascii_case(key) || style.number().to_string() == key
            })
            .ok_or_else(|| RenderError::UnknownPreset {
                kind: "style",
                name: key.to_string(),
            })
    }
}

/// A terminal escape pair wrapped around colored output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpec {
    pub start: &'static str,
    pub reset: &'static str,
}

/// Named foreground color presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorPreset {
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

impl ColorPreset {
    /// Every preset, in menu order
    pub const ALL: [ColorPreset; 8] = [
        ColorPreset::None,
        ColorPreset::Red,
        ColorPreset::Green,
        ColorPreset::Yellow,
        ColorPreset::Blue,
        ColorPreset::Purple,
        ColorPreset::Cyan,
        ColorPreset::White,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ColorPreset::None => "No Color",
            ColorPreset::Red => "Red",
            ColorPreset::Green => "Green",
            ColorPreset::Yellow => "Yellow",
            ColorPreset::Blue => "Blue",
            ColorPreset::Purple => "Purple",
            ColorPreset::Cyan => "Cyan",
            ColorPreset::White => "White",
        }
    }

    /// ANSI bright foreground code, `None` for no coloring
    pub fn code(self) -> Option<&'static str> {
        match self {
            ColorPreset::None => None,
            ColorPreset::Red => Some("\x1b[91m"),
            ColorPreset::Green => Some("\x1b[92m"),
            ColorPreset::Yellow => Some("\x1b[93m"),
            ColorPreset::Blue => Some("\x1b[94m"),
            ColorPreset::Purple => Some("\x1b[95m"),
            ColorPreset::Cyan => Some("\x1b[96m"),
            ColorPreset::White => Some("\x1b[97m"),
        }
    }

    /// Approximate RGB of the terminal color, for non-terminal previews
    pub fn rgb(self) -> Option<[u8; 3]> {
        match self {
            ColorPreset::None => None,
            ColorPreset::Red => Some([255, 85, 85]),
            ColorPreset::Green => Some([85, 255, 85]),
            ColorPreset::Yellow => Some([255, 255, 85]),
            ColorPreset::Blue => Some([85, 85, 255]),
            ColorPreset::Purple => Some([255, 85, 255]),
            ColorPreset::Cyan => Some([85, 255, 255]),
            ColorPreset::White => Some([255, 255, 255]),
        }
    }

    pub fn spec(self) -> Option<ColorSpec> {
        self.code().map(|start| ColorSpec {
            start,
            reset: RESET_CODE,
        })
    }

    pub fn number(self) -> usize {
        ColorPreset::ALL.iter().position(|c| *c == self).unwrap_or(0) + 1
    }
}

impl fmt::Display for ColorPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorPreset {
    type Err = RenderError;

    /// Accepts a preset name (any case), `none`, or its menu number
    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        if key.eq_ignore_ascii_case("none") {
            return Ok(ColorPreset::None);
        }
        ColorPreset::ALL
            .into_iter()
            .find(|color| {
                color.name().eq_ignore_ascii_case(key) || color.number().to_string() == key
            })
            .ok_or_else(|| RenderError::UnknownPreset {
                kind: "color",
                name: key.to_string(),
            })
    }
}

/// Every start code in the registry, used when stripping colors
pub fn registered_color_codes() -> impl Iterator<Item = &'static str> {
    ColorPreset::ALL.into_iter().filter_map(ColorPreset::code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_rejects_short_ramps() {
        assert!(matches!(Palette::new(""), Err(RenderError::InvalidPalette(_))));
        assert!(matches!(Palette::new("#"), Err(RenderError::InvalidPalette(_))));
        let palette = Palette::new("# ").unwrap();
        assert_eq!(palette.len(), 2);
        assert!(!palette.is_empty());
    }

    #[test]
    fn test_index_bounds() {
        for n in 2..=16 {
            let glyphs: String = (0..n).map(|i| char::from(b'a' + i as u8)).collect();
            let palette = Palette::new(&glyphs).unwrap();
            assert_eq!(palette.index_for(0), 0);
            assert_eq!(palette.index_for(255), n - 1);
        }
    }

    #[test]
    fn test_index_is_monotonic() {
        for style in Style::ALL {
            let palette = style.palette();
            let mut prev = 0;
            for v in 0..=255u8 {
                let idx = palette.index_for(v);
                assert!(idx >= prev, "{style}: index dropped at {v}");
                assert!(idx < palette.len());
                prev = idx;
            }
        }
    }

    #[test]
    fn test_index_mid_gray_ten_glyphs() {
        let palette = Palette::new("0123456789").unwrap();
        // floor(128 * 9 / 255) = floor(4.52)
        assert_eq!(palette.index_for(128), 4);
        assert_eq!(palette.glyph_for(128), '4');
    }

    #[test]
    fn test_style_registry() {
        assert_eq!(Style::ALL.len(), 6);
        assert_eq!(Style::Classic.palette().len(), 11);
        assert_eq!(Style::Blocks.palette().glyphs()[0], '█');
        assert_eq!(Style::Detailed.preview(), "@%#*+...");
        assert_eq!(Style::Simple.number(), 6);
    }

    #[test]
    fn test_style_from_str() {
        assert_eq!("classic".parse::<Style>().unwrap(), Style::Classic);
        assert_eq!(" DOTS ".parse::<Style>().unwrap(), Style::Dots);
        assert_eq!("2".parse::<Style>().unwrap(), Style::Blocks);
        assert!("7".parse::<Style>().is_err());
        assert!("fancy".parse::<Style>().is_err());
    }

    #[test]
    fn test_color_registry() {
        assert_eq!(ColorPreset::ALL.len(), 8);
        assert_eq!(ColorPreset::None.spec(), None);
        let red = ColorPreset::Red.spec().unwrap();
        assert_eq!(red.start, "\x1b[91m");
        assert_eq!(red.reset, RESET_CODE);
        assert_eq!(registered_color_codes().count(), 7);
    }

    #[test]
    fn test_color_from_str() {
        assert_eq!("none".parse::<ColorPreset>().unwrap(), ColorPreset::None);
        assert_eq!("No Color".parse::<ColorPreset>().unwrap(), ColorPreset::None);
        assert_eq!("cyan".parse::<ColorPreset>().unwrap(), ColorPreset::Cyan);
        assert_eq!("8".parse::<ColorPreset>().unwrap(), ColorPreset::White);
        assert!("orange".parse::<ColorPreset>().is_err());
    }
}
