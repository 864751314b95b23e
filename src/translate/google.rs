//! Google translate backend
//!
//! Talks to the public translate_a/single endpoint (the same service the
//! usual unofficial clients wrap). One GET per line; `dj=1` makes the
//! response a JSON object instead of nested arrays.

use crate::error::PipelineError;
use crate::translate::Translate;
use serde::Deserialize;

const ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

pub struct GoogleTranslator {
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new() -> Self {
        Self {
            endpoint: ENDPOINT.to_string(),
        }
    }
}

impl Default for GoogleTranslator {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(default)]
    sentences: Vec<Sentence>,
}

/// The endpoint mixes translation chunks and transliteration entries in the
/// same array; only the former carry `trans`.
#[derive(Debug, Deserialize)]
struct Sentence {
    #[serde(default)]
    trans: Option<String>,
}

impl Translate for GoogleTranslator {
    fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, PipelineError> {
        let response = ureq::get(self.endpoint.as_str())
            .query("client", "gtx")
            .query("dt", "t")
            .query("dj", "1")
            .query("sl", source)
            .query("tl", target)
            .query("q", text)
            .call()
            .map_err(|e| PipelineError::TranslationError(format!("Request failed: {}", e)))?;

        let body: TranslateResponse = response
            .into_body()
            .read_json()
            .map_err(|e| PipelineError::TranslationError(format!("Invalid response: {}", e)))?;

        let translated: String = body
            .sentences
            .iter()
            .filter_map(|s| s.trans.as_deref())
            .collect();

        if translated.is_empty() {
            return Err(PipelineError::TranslationError(
                "Empty translation response".to_string(),
            ));
        }

        Ok(translated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_chunks_concatenate() {
        let json = r#"{
            "sentences": [
                {"trans": "Hello ", "orig": "Hola "},
                {"trans": "world", "orig": "mundo"},
                {"translit": "ola mundo"}
            ],
            "src": "es"
        }"#;

        let body: TranslateResponse = serde_json::from_str(json).unwrap();
        let translated: String = body
            .sentences
            .iter()
            .filter_map(|s| s.trans.as_deref())
            .collect();

        assert_eq!(translated, "Hello world");
    }

    #[test]
    fn test_response_without_sentences_parses() {
        let body: TranslateResponse = serde_json::from_str(r#"{"src": "es"}"#).unwrap();
        assert!(body.sentences.is_empty());
    }
}
