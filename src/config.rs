use std::path::PathBuf;

/// Tesseract language model for the source text
const OCR_LANGUAGE: &str = "spa";
/// Translation language pair (ISO 639-1)
const SOURCE_LANGUAGE: &str = "es";
const TARGET_LANGUAGE: &str = "en";

/// Pipeline configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Destination for the translation map
    pub output_path: PathBuf,
    /// Tesseract trained-model name (Spanish)
    pub ocr_language: String,
    /// Translation source language
    pub source_language: String,
    /// Translation target language
    pub target_language: String,
    /// Explicit tessdata directory; auto-provisioned when unset
    pub tessdata_path: Option<String>,
}

impl Config {
    pub fn new(output_path: PathBuf, tessdata_path: Option<String>) -> Self {
        Self {
            output_path,
            ocr_language: OCR_LANGUAGE.to_string(),
            source_language: SOURCE_LANGUAGE.to_string(),
            target_language: TARGET_LANGUAGE.to_string(),
            tessdata_path,
        }
    }
}
