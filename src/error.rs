use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to initialize OCR engine: {0}")]
    InitializationError(String),

    #[error("Failed to load image: {0}")]
    ImageLoadError(String),

    #[error("Preprocessing failed: {0}")]
    PreprocessingError(String),

    #[error("OCR failed: {0}")]
    OcrError(String),

    #[error("Translation failed: {0}")]
    TranslationError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}
