//! Line translation
//!
//! Each line is translated with its own synchronous request. A failed line
//! is warned about and recorded, never retried; the rest of the batch keeps
//! going.

pub mod google;

use crate::error::PipelineError;
use std::collections::BTreeMap;

/// Trait implemented by translation backends
pub trait Translate {
    /// Translate `text` from `source` to `target` (ISO 639-1 codes)
    fn translate(&self, text: &str, source: &str, target: &str)
        -> Result<String, PipelineError>;
}

/// A line that could not be translated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line: String,
    pub reason: String,
}

/// Outcome of a translation batch: successful lines keyed by source text,
/// failed lines listed with their reasons.
#[derive(Debug, Default)]
pub struct TranslationReport {
    pub translations: BTreeMap<String, String>,
    pub skipped: Vec<SkippedLine>,
}

/// Translate each line independently. One request per input line, in order;
/// duplicate lines collapse in the map but still cost their own round trip.
pub fn translate_lines(
    translator: &dyn Translate,
    lines: &[String],
    source: &str,
    target: &str,
) -> TranslationReport {
    let mut report = TranslationReport::default();

    for line in lines {
        match translator.translate(line, source, target) {
            Ok(translated) => {
                report.translations.insert(line.clone(), translated);
            }
            Err(e) => {
                tracing::warn!("Could not translate {:?}: {}", line, e);
                report.skipped.push(SkippedLine {
                    line: line.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    report
}
