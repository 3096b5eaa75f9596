use image::{GrayImage, Luma, Rgb, RgbImage, imageops};
use imageproc::map::map_pixels;

/// Pivot of the contrast stretch
pub const MID_GRAY: f32 = 128.0;

/// Scale every channel by `factor`
///
/// A factor of 0.0 gives black, 1.0 leaves the image untouched.
/// Results are rounded and clamped to [0, 255].
pub fn adjust_brightness(img: &RgbImage, factor: f32) -> RgbImage {
    map_pixels(img, |pixel| map_channels(pixel, |c| c * factor))
}

/// Linear contrast stretch around mid-gray
///
/// Each channel becomes `128 + (c - 128) * factor`, so 1.0 is the identity,
/// values below 1.0 pull towards gray and values above push away from it.
pub fn adjust_contrast(img: &RgbImage, factor: f32) -> RgbImage {
    map_pixels(img, |pixel| {
        map_channels(pixel, |c| MID_GRAY + (c - MID_GRAY) * factor)
    })
}

fn map_channels(pixel: Rgb<u8>, f: impl Fn(f32) -> f32) -> Rgb<u8> {
    Rgb(pixel.0.map(|c| f(c as f32).round().clamp(0.0, 255.0) as u8))
}

/// ITU-R 601-2 luma of a single pixel
///
/// Fixed-point form of `0.299 R + 0.587 G + 0.114 B`; the weights sum to
/// 65536 so white maps to exactly 255.
#[inline]
pub fn luma(pixel: Rgb<u8>) -> u8 {
    let [r, g, b] = pixel.0;
    ((19595 * r as u32 + 38470 * g as u32 + 7471 * b as u32 + 0x8000) >> 16) as u8
}

/// Convert an RGB image to single-channel luminance
pub fn calculate_luminance(img: &RgbImage) -> GrayImage {
    map_pixels(img, |pixel| Luma([luma(pixel)]))
}

/// Resample a luminance image to exactly `width`x`height`
///
/// Uses Lanczos3, which low-pass filters when shrinking so fine detail
/// does not alias into the glyph grid.
pub fn resample(img: &GrayImage, width: u32, height: u32) -> GrayImage {
    if img.dimensions() == (width, height) {
        return img.clone();
    }
    imageops::resize(img, width, height, imageops::FilterType::Lanczos3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_black() {
        let img = RgbImage::from_pixel(10, 10, Rgb([0, 0, 0]));
        let lum = calculate_luminance(&img);
        assert_eq!(lum.get_pixel(0, 0)[0], 0);
    }

    #[test]
    fn test_luminance_white() {
        let img = RgbImage::from_pixel(10, 10, Rgb([255, 255, 255]));
        let lum = calculate_luminance(&img);
        assert_eq!(lum.get_pixel(0, 0)[0], 255);
    }

    #[test]
    fn test_luminance_weights() {
        // Green contributes the most, blue the least
        let r = luma(Rgb([255, 0, 0]));
        let g = luma(Rgb([0, 255, 0]));
        let b = luma(Rgb([0, 0, 255]));
        assert_eq!(r, 76);
        assert_eq!(g, 150);
        assert_eq!(b, 29);
    }

    #[test]
    fn test_luminance_gray_is_identity() {
        for v in [0u8, 1, 64, 127, 128, 200, 255] {
            assert_eq!(luma(Rgb([v, v, v])), v);
        }
    }

    #[test]
    fn test_luminance_maps_every_pixel() {
        let img = RgbImage::from_fn(9, 5, |x, y| Rgb([(x * 28) as u8, (y * 60) as u8, 200]));
        let lum = calculate_luminance(&img);
        assert_eq!(lum.dimensions(), (9, 5));
        for (x, y, pixel) in img.enumerate_pixels() {
            assert_eq!(lum.get_pixel(x, y)[0], luma(*pixel));
        }
    }

    #[test]
    fn test_brightness_scales_and_clamps() {
        let img = RgbImage::from_pixel(2, 2, Rgb([100, 200, 10]));
        let out = adjust_brightness(&img, 1.5);
        assert_eq!(out.get_pixel(0, 0), &Rgb([150, 255, 15]));

        let out = adjust_brightness(&img, 0.5);
        assert_eq!(out.get_pixel(1, 1), &Rgb([50, 100, 5]));
    }

    #[test]
    fn test_brightness_identity() {
        let img = RgbImage::from_fn(8, 8, |x, y| Rgb([(x * 30) as u8, (y * 30) as u8, 77]));
        assert_eq!(adjust_brightness(&img, 1.0), img);
    }

    #[test]
    fn test_contrast_around_mid_gray() {
        let img = RgbImage::from_pixel(1, 1, Rgb([128, 64, 192]));
        let out = adjust_contrast(&img, 2.0);
        // 128 is the pivot, others move away from it
        assert_eq!(out.get_pixel(0, 0), &Rgb([128, 0, 255]));

        let out = adjust_contrast(&img, 0.5);
        assert_eq!(out.get_pixel(0, 0), &Rgb([128, 96, 160]));
    }

    #[test]
    fn test_resample_dimensions() {
        let img = GrayImage::from_pixel(200, 100, Luma([90]));
        let out = resample(&img, 50, 15);
        assert_eq!(out.dimensions(), (50, 15));
    }

    #[test]
    fn test_resample_flat_image_stays_flat() {
        let img = GrayImage::from_pixel(64, 64, Luma([200]));
        let out = resample(&img, 20, 7);
        for pixel in out.pixels() {
            assert!((pixel[0] as i32 - 200).abs() <= 1);
        }
    }
}
