use glyph_rendr::processor::output_dimensions;
use glyph_rendr::{RenderConfig, convert};
use image::{DynamicImage, Luma, GrayImage};

fn main() {
    println!("Glyph Renderer - Aspect Correction Demo");
    println!("=======================================\n");

    let test_cases = vec![
        (200, 100, 50, "200x100 at 50 columns"),
        (1920, 1080, 100, "1920x1080 (Full HD) at 100 columns"),
        (100, 100, 20, "100x100 square at 20 columns"),
        (4000, 10, 20, "4000x10 strip (collapses to zero rows)"),
    ];

    for (width, height, columns, description) in test_cases {
        println!("Testing: {}", description);

        match output_dimensions(width, height, columns) {
            Ok((out_w, out_h)) => println!("  Grid:   {}x{}", out_w, out_h),
            Err(e) => {
                println!("  Error:  {}\n", e);
                continue;
            }
        }

        // Diagonal gradient so every row differs
        let img = GrayImage::from_fn(width, height, |x, y| Luma([((x + y) % 256) as u8]));
        let config = RenderConfig {
            width: columns,
            ..Default::default()
        };

        match convert(&DynamicImage::ImageLuma8(img), &config) {
            Ok(art) => println!("  Lines:  {}", art.text.lines().count()),
            Err(e) => println!("  Error:  {}", e),
        }
        println!();
    }

    println!("Rows are divided by 1.65 because terminal cells are taller than wide.");
}
