use crate::error::PipelineError;
use image::DynamicImage;

/// Collapse the image to a single luminance channel.
/// Every later step operates on grayscale data.
pub fn apply(image: DynamicImage) -> Result<DynamicImage, PipelineError> {
    Ok(DynamicImage::ImageLuma8(image.to_luma8()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_grayscale_flattens_color_channels() {
        let mut img = RgbImage::new(4, 4);
        img.put_pixel(0, 0, Rgb([200, 40, 40]));
        img.put_pixel(1, 0, Rgb([40, 200, 40]));

        let result = apply(DynamicImage::ImageRgb8(img)).unwrap();
        assert!(matches!(result, DynamicImage::ImageLuma8(_)));
    }

    #[test]
    fn test_grayscale_preserves_dimensions() {
        let img = RgbImage::new(64, 48);
        let result = apply(DynamicImage::ImageRgb8(img)).unwrap();
        assert_eq!((result.width(), result.height()), (64, 48));
    }
}
