//! Square resize for launcher icons.
//!
//! Icons are always square; the source aspect ratio is intentionally not
//! preserved. Uses Lanczos3 filtering for high-quality resampling.

use image::DynamicImage;
use image::imageops::FilterType;
use tracing::debug;

/// Resize an image to an exact `size` x `size` square.
///
/// A non-square source is stretched to fit; launcher assets must match the
/// platform's declared dimensions exactly. Returns the image unchanged if it
/// is already the target square.
pub fn resize_to_square(img: &DynamicImage, size: u32) -> DynamicImage {
    let (orig_w, orig_h) = (img.width(), img.height());

    if orig_w == size && orig_h == size {
        debug!(size, "Image already at target size, skipping resize");
        return img.clone();
    }

    debug!(orig_w, orig_h, size, "Resizing image to square");
    img.resize_exact(size, size, FilterType::Lanczos3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    /// Create an opaque test DynamicImage with given dimensions.
    fn create_test_image(width: u32, height: u32) -> DynamicImage {
        let rgba = RgbaImage::from_pixel(width, height, Rgba([40, 90, 200, 255]));
        DynamicImage::ImageRgba8(rgba)
    }

    #[test]
    fn test_resize_square_downscale() {
        let img = create_test_image(512, 512);
        let result = resize_to_square(&img, 48);
        assert_eq!(result.width(), 48);
        assert_eq!(result.height(), 48);
    }

    #[test]
    fn test_resize_square_upscale() {
        let img = create_test_image(100, 100);
        let result = resize_to_square(&img, 1024);
        assert_eq!(result.width(), 1024);
        assert_eq!(result.height(), 1024);
    }

    #[test]
    fn test_resize_ignores_aspect_ratio() {
        let img = create_test_image(800, 200);
        let result = resize_to_square(&img, 96);
        assert_eq!(result.width(), 96);
        assert_eq!(result.height(), 96);
    }

    #[test]
    fn test_resize_same_size_is_noop() {
        let img = create_test_image(192, 192);
        let result = resize_to_square(&img, 192);
        assert_eq!(result.width(), 192);
        assert_eq!(result.height(), 192);
    }
}
