//! Tesseract engine
//!
//! Statically linked Tesseract via the tesseract-static crate. The Spanish
//! trained model is downloaded into a per-user cache directory on first use.

use crate::config::Config;
use crate::error::PipelineError;
use crate::ocr::{OcrEngine, OcrResult};
use image::DynamicImage;
use std::fs::File;
use std::path::Path;
use tesseract_static::tesseract::Tesseract;

pub struct TesseractEngine {
    /// Directory holding <lang>.traineddata
    tessdata_path: String,
    language: String,
}

impl TesseractEngine {
    /// Create the engine, provisioning tessdata if needed.
    pub fn new(config: &Config) -> Result<Self, PipelineError> {
        let language = config.ocr_language.clone();

        let tessdata_path = match &config.tessdata_path {
            Some(path) => path.clone(),
            None => ensure_tessdata_available(&language)?,
        };

        // Probe initialization so a bad tessdata path fails here, not mid-run
        let probe = Tesseract::new(Some(&tessdata_path), Some(&language)).map_err(|e| {
            PipelineError::InitializationError(format!("Failed to initialize Tesseract: {}", e))
        })?;
        drop(probe);

        tracing::info!(
            "Tesseract engine ready (tessdata: {}, language: {})",
            tessdata_path,
            language
        );

        Ok(Self {
            tessdata_path,
            language,
        })
    }
}

impl OcrEngine for TesseractEngine {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    fn recognize(&self, image: &DynamicImage) -> Result<OcrResult, PipelineError> {
        // Hand the image over as an in-memory BMP; leptonica always accepts BMP,
        // and its encoder wants RGB8
        let rgb_img = image.to_rgb8();
        let (width, height) = rgb_img.dimensions();

        let mut bmp_data = Vec::new();
        {
            let mut cursor = std::io::Cursor::new(&mut bmp_data);
            rgb_img
                .write_to(&mut cursor, image::ImageFormat::Bmp)
                .map_err(|e| PipelineError::OcrError(format!("Failed to encode BMP: {}", e)))?;
        }

        tracing::debug!(
            "Recognizing image: {}x{}, BMP size: {} bytes",
            width,
            height,
            bmp_data.len()
        );

        let mut tess = Tesseract::new(Some(&self.tessdata_path), Some(&self.language))
            .map_err(|e| PipelineError::OcrError(format!("Failed to create Tesseract: {}", e)))?;

        tess = tess
            .set_image_from_mem(&bmp_data)
            .map_err(|e| PipelineError::OcrError(format!("Failed to set image: {}", e)))?;

        tess = tess
            .recognize()
            .map_err(|e| PipelineError::OcrError(format!("Failed to recognize text: {}", e)))?;

        let text = tess
            .get_text()
            .map_err(|e| PipelineError::OcrError(format!("Failed to get text: {}", e)))?;

        let confidence = tess.mean_text_conf() as f32 / 100.0;

        Ok(OcrResult { text, confidence })
    }
}

/// Ensure the trained model for `language` is present, downloading on first use.
/// Returns the tessdata directory (Tesseract wants the directory, not the file).
fn ensure_tessdata_available(language: &str) -> Result<String, PipelineError> {
    let cache_dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("tabla-translate")
        .join("tessdata");

    std::fs::create_dir_all(&cache_dir).map_err(|e| {
        PipelineError::InitializationError(format!("Failed to create tessdata directory: {}", e))
    })?;

    let traineddata_path = cache_dir.join(format!("{}.traineddata", language));

    if traineddata_path.exists() {
        tracing::info!("Using cached tessdata from {:?}", cache_dir);
    } else {
        let url = tessdata_url(language);
        tracing::info!(
            "Downloading tessdata for '{}' (this may take a moment)...",
            language
        );
        download_file(&url, &traineddata_path)?;
        tracing::info!("Downloaded tessdata to {:?}", traineddata_path);
    }

    cache_dir
        .to_str()
        .map(str::to_string)
        .ok_or_else(|| PipelineError::InitializationError("Invalid tessdata path".to_string()))
}

/// tessdata_fast: smaller models, faster download than the full set
fn tessdata_url(language: &str) -> String {
    format!(
        "https://github.com/tesseract-ocr/tessdata_fast/raw/main/{}.traineddata",
        language
    )
}

fn download_file(url: &str, path: &Path) -> Result<(), PipelineError> {
    let response = ureq::get(url).call().map_err(|e| {
        PipelineError::InitializationError(format!("Failed to download tessdata: {}", e))
    })?;

    let mut file = File::create(path).map_err(|e| {
        PipelineError::InitializationError(format!("Failed to create tessdata file: {}", e))
    })?;

    let mut reader = response.into_body().into_reader();
    std::io::copy(&mut reader, &mut file).map_err(|e| {
        PipelineError::InitializationError(format!("Failed to write tessdata file: {}", e))
    })?;

    Ok(())
}
