//! Image preprocessing for OCR
//!
//! Fixed step sequence: grayscale, median denoise, Otsu binarization.

pub mod steps;

use crate::error::PipelineError;
use image::DynamicImage;
use std::path::Path;
use std::time::Instant;

/// Load an image from disk and prepare it for OCR.
///
/// A missing or undecodable file is an [`PipelineError::ImageLoadError`].
pub fn prepare(path: &Path) -> Result<DynamicImage, PipelineError> {
    let image = image::open(path)
        .map_err(|e| PipelineError::ImageLoadError(format!("{}: {}", path.display(), e)))?;
    process(image)
}

/// Run the preparation steps over an already decoded image.
pub fn process(image: DynamicImage) -> Result<DynamicImage, PipelineError> {
    let start = Instant::now();

    let img = run_step("grayscale", image, steps::grayscale::apply)?;
    let img = run_step("denoise", img, steps::denoise::apply)?;
    let img = run_step("threshold", img, steps::threshold::apply)?;

    tracing::debug!(
        "Preprocessing finished in {}ms ({}x{})",
        start.elapsed().as_millis(),
        img.width(),
        img.height()
    );

    Ok(img)
}

fn run_step<F>(name: &str, img: DynamicImage, step_fn: F) -> Result<DynamicImage, PipelineError>
where
    F: FnOnce(DynamicImage) -> Result<DynamicImage, PipelineError>,
{
    let step_start = Instant::now();
    let result = step_fn(img)?;
    tracing::debug!("Step {} took {}ms", name, step_start.elapsed().as_millis());
    Ok(result)
}
