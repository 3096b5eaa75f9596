mod app;

use app::GlyphApp;
use eframe::egui;
use glyph_rendr::Style;

fn main() -> Result<(), eframe::Error> {
    // Configure logging
    env_logger::init();

    // Configure viewport/window
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Glyph Renderer")
            .with_icon(load_icon()),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Glyph Renderer",
        options,
        Box::new(|cc| Box::new(GlyphApp::new(cc))),
    )
}

/// Build the window icon by quantizing a radial gradient with the Blocks palette
fn load_icon() -> egui::IconData {
    let icon_size = 32;
    let mut pixels = vec![0u8; icon_size * icon_size * 4];
    let palette = Style::Blocks.palette();

    for y in 0..icon_size {
        for x in 0..icon_size {
            let idx = (y * icon_size + x) * 4;

            let dx = x as f32 - 15.5;
            let dy = y as f32 - 15.5;
            let lum = (255.0 - (dx * dx + dy * dy).sqrt() * 11.0).clamp(0.0, 255.0) as u8;

            // Dense glyphs become bright pixels
            let level = palette.len() - 1 - palette.index_for(lum);
            let value = (level * 255 / (palette.len() - 1)) as u8;

            pixels[idx] = 0;            // R
            pixels[idx + 1] = value;    // G
            pixels[idx + 2] = value / 2; // B
            pixels[idx + 3] = 255;      // A
        }
    }

    egui::IconData {
        rgba: pixels,
        width: icon_size as u32,
        height: icon_size as u32,
    }
}
