//! Extracts Spanish text from an image via OCR, translates each line to
//! English, and saves the result as a JSON mapping.
//!
//! The pipeline is four sequential stages: preprocess (grayscale, median
//! denoise, Otsu binarize), extract (Tesseract with the Spanish model),
//! translate (one request per line, failures skipped with a warning), and
//! write (pretty-printed UTF-8 JSON). Everything runs on the calling
//! thread.

pub mod config;
pub mod error;
pub mod ocr;
pub mod output;
pub mod pipeline;
pub mod preprocess;
pub mod translate;

#[cfg(feature = "gui")]
pub mod gui;
