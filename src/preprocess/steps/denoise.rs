use crate::error::PipelineError;
use image::DynamicImage;
use imageproc::filter::median_filter;

/// Suppress speckle noise with a small median filter.
/// 3x3 window (radius 1); keeps glyph edges intact where a Gaussian would smear them.
pub fn apply(image: DynamicImage) -> Result<DynamicImage, PipelineError> {
    let gray = image.to_luma8();
    let denoised = median_filter(&gray, 1, 1);
    Ok(DynamicImage::ImageLuma8(denoised))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn test_denoise_removes_isolated_speckles() {
        let mut img = GrayImage::from_pixel(12, 12, Luma([200]));
        img.put_pixel(6, 6, Luma([0]));

        let result = apply(DynamicImage::ImageLuma8(img)).unwrap();

        // The lone dark pixel has no support in its neighborhood
        assert_eq!(result.to_luma8().get_pixel(6, 6).0[0], 200);
    }

    #[test]
    fn test_denoise_keeps_solid_regions() {
        let mut img = GrayImage::from_pixel(12, 12, Luma([220]));
        for x in 2..10 {
            for y in 4..8 {
                img.put_pixel(x, y, Luma([30]));
            }
        }

        let result = apply(DynamicImage::ImageLuma8(img)).unwrap();

        // Interior of a solid block survives the filter
        assert_eq!(result.to_luma8().get_pixel(5, 6).0[0], 30);
    }
}
