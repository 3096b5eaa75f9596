//! Handlers for listing presets and converting an image.

use crate::args::Args;
use anyhow::Context;
use glyph_rendr::{ColorPreset, RenderConfig, Style, convert_file, export};
use std::path::Path;
use std::process::ExitCode;

/// Print the style and color registries to stdout.
pub fn list_presets() {
    println!("Styles:");
    for style in Style::ALL {
        println!(
            "  {}. {:<9} {}",
            style.number(),
            style.name().to_lowercase(),
            style.preview()
        );
    }
    println!();
    println!("Colors:");
    for color in ColorPreset::ALL {
        let key = match color {
            ColorPreset::None => "none".to_string(),
            other => other.name().to_lowercase(),
        };
        println!("  {}. {:<9} {}", color.number(), key, color.name());
    }
}

/// Settings summary printed before the art.
pub fn summary(image: &Path, style: Style, color: ColorPreset, config: &RenderConfig) -> String {
    let rule = "=".repeat(50);
    [
        rule.clone(),
        "SETTINGS SUMMARY".to_string(),
        rule.clone(),
        format!(
            "Image: {}",
            image.file_name().unwrap_or(image.as_os_str()).to_string_lossy()
        ),
        format!("Style: {}", style.name()),
        format!("Color: {}", color.name()),
        format!("Width: {}", config.width),
        format!("Brightness: {}", config.brightness),
        format!("Contrast: {}", config.contrast),
        rule,
    ]
    .join("\n")
}

/// Convert the image named in `args`, print it and optionally export it.
pub fn convert(args: &Args, image: &Path) -> ExitCode {
    let style = Style::from(args.style);
    let color = ColorPreset::from(args.color);

    let config = match RenderConfig::new(style, color, args.width, args.brightness, args.contrast) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(2);
        }
    };

    if !args.quiet {
        eprintln!("{}", summary(image, style, color, &config));
    }

    let art = match convert_file(image, &config)
        .with_context(|| format!("failed to convert {}", image.display()))
    {
        Ok(art) => art,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", art.text);

    if args.wants_export() {
        match export(&art.text, args.output.as_deref()) {
            Ok(path) => eprintln!("Saved as: {}", path.display()),
            Err(e) => {
                eprintln!("Error: failed to save: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
