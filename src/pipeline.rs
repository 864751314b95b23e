//! Pipeline orchestration
//!
//! [`run`] chains the stages without touching any UI concern, so the CLI,
//! the GUI, and the tests all drive the same code path.

use crate::config::Config;
use crate::error::PipelineError;
use crate::ocr::{self, OcrEngine};
use crate::translate::{self, SkippedLine, Translate};
use std::collections::BTreeMap;
use std::path::Path;

/// What one pipeline run produced
#[derive(Debug)]
pub struct RunSummary {
    /// Source line -> translated line, successful lines only
    pub translations: BTreeMap<String, String>,
    /// Lines that failed to translate
    pub skipped: Vec<SkippedLine>,
    /// Lines the extractor found (before translation)
    pub lines_found: usize,
}

/// Preprocess the image at `path`, extract Spanish lines, and translate
/// them. Writing the result is the caller's job. Finding no text is not an
/// error; it is reported through `lines_found` (and warned about here).
pub fn run(
    path: &Path,
    engine: &dyn OcrEngine,
    translator: &dyn Translate,
    config: &Config,
) -> Result<RunSummary, PipelineError> {
    tracing::info!("Processing {}", path.display());

    let image = crate::preprocess::prepare(path)?;
    let lines = ocr::extract_lines(engine, &image)?;

    if lines.is_empty() {
        tracing::warn!("No text found in {}", path.display());
    } else {
        tracing::info!("Extracted {} lines, translating...", lines.len());
    }

    let report = translate::translate_lines(
        translator,
        &lines,
        &config.source_language,
        &config.target_language,
    );

    Ok(RunSummary {
        lines_found: lines.len(),
        translations: report.translations,
        skipped: report.skipped,
    })
}
