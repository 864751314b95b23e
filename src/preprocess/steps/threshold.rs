use crate::error::PipelineError;
use image::DynamicImage;
use imageproc::contrast::{otsu_level, threshold, ThresholdType};

/// Binarize with an automatically chosen global threshold.
/// Otsu picks the level that maximizes between-class variance, so the
/// caller never supplies a fixed cutoff.
pub fn apply(image: DynamicImage) -> Result<DynamicImage, PipelineError> {
    let gray = image.to_luma8();
    let level = otsu_level(&gray);
    let binarized = threshold(&gray, level, ThresholdType::Binary);
    Ok(DynamicImage::ImageLuma8(binarized))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn test_threshold_output_is_binary() {
        let img = GrayImage::from_fn(50, 50, |x, _| Luma([(x as u8).saturating_mul(5)]));

        let result = apply(DynamicImage::ImageLuma8(img)).unwrap();

        for pixel in result.to_luma8().pixels() {
            assert!(
                pixel.0[0] == 0 || pixel.0[0] == 255,
                "Expected binary pixel, got {}",
                pixel.0[0]
            );
        }
    }

    #[test]
    fn test_threshold_separates_text_from_background() {
        // Dark text row on a light page
        let mut img = GrayImage::from_pixel(50, 20, Luma([240]));
        for x in 10..40 {
            img.put_pixel(x, 10, Luma([20]));
        }

        let result = apply(DynamicImage::ImageLuma8(img)).unwrap();
        let result_gray = result.to_luma8();

        assert_eq!(result_gray.get_pixel(25, 10).0[0], 0);
        assert_eq!(result_gray.get_pixel(25, 5).0[0], 255);
    }
}
