//! Text extraction
//!
//! The [`OcrEngine`] trait is the seam between the pipeline and the OCR
//! backend; [`extract_lines`] turns raw engine output into clean lines.

pub mod tesseract;

use crate::error::PipelineError;
use image::DynamicImage;

/// Raw OCR output
#[derive(Debug, Clone)]
pub struct OcrResult {
    pub text: String,
    /// Mean recognition confidence, 0.0-1.0
    pub confidence: f32,
}

/// Trait implemented by OCR backends
pub trait OcrEngine: Send + Sync {
    /// Engine identifier (e.g., "tesseract")
    fn name(&self) -> &'static str;

    /// Recognize text in a preprocessed image
    fn recognize(&self, image: &DynamicImage) -> Result<OcrResult, PipelineError>;
}

/// Run OCR over a preprocessed image and return trimmed, non-empty lines
/// in reading order. An empty result is not an error; the caller decides
/// how to surface it.
pub fn extract_lines(
    engine: &dyn OcrEngine,
    image: &DynamicImage,
) -> Result<Vec<String>, PipelineError> {
    let result = engine.recognize(image)?;

    tracing::debug!(
        "OCR ({}) returned {} chars, confidence {:.2}",
        engine.name(),
        result.text.len(),
        result.confidence
    );

    Ok(split_lines(&result.text))
}

/// Split raw OCR text on line breaks, trim whitespace, drop empties.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_trims_and_drops_empties() {
        let raw = "  Hola mundo  \n\n\tBuenos días\n   \nAdiós\n";
        let lines = split_lines(raw);
        assert_eq!(lines, vec!["Hola mundo", "Buenos días", "Adiós"]);
    }

    #[test]
    fn test_split_lines_preserves_reading_order_and_duplicates() {
        let raw = "uno\ndos\nuno\n";
        assert_eq!(split_lines(raw), vec!["uno", "dos", "uno"]);
    }

    #[test]
    fn test_split_lines_of_blank_text_is_empty() {
        assert!(split_lines("").is_empty());
        assert!(split_lines(" \n \t \n").is_empty());
    }
}
