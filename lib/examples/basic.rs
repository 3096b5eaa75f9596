/// Basic example: Convert a synthetic test image to glyph art
///
/// This draws a shaded circle on a gradient and prints it with every style
use glyph_rendr::{ColorPreset, RenderConfig, Style, convert};
use image::{DynamicImage, Rgb, RgbImage};

fn main() -> glyph_rendr::Result<()> {
    println!("Glyph Renderer - Basic Example");
    println!("==============================\n");

    let width = 320;
    let height = 160;
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 60.0;

    let img = RgbImage::from_fn(width, height, |x, y| {
        let dx = x as f32 - center_x;
        let dy = y as f32 - center_y;
        let dist = (dx * dx + dy * dy).sqrt();

        if dist < radius {
            // Bright disc fading towards its rim
            let v = (255.0 * (1.0 - dist / radius * 0.6)) as u8;
            Rgb([v, v, v])
        } else {
            // Horizontal gradient background
            let v = (x * 120 / width) as u8;
            Rgb([v, v / 2, v])
        }
    });
    let img = DynamicImage::ImageRgb8(img);

    println!("Created test image: {}x{}\n", width, height);

    for (i, style) in Style::ALL.into_iter().enumerate() {
        // Cycle through the colored presets
        let color = ColorPreset::ALL[1 + i % (ColorPreset::ALL.len() - 1)];
        let config = RenderConfig::new(style, color, 60, 1.0, 1.2)?;
        let art = convert(&img, &config)?;

        println!("{} ({}):", style, color);
        println!("{}\n", art.text);
    }

    Ok(())
}
