//! Result writer

use crate::error::PipelineError;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Serialize the translation map as pretty-printed UTF-8 JSON, creating or
/// overwriting `path`. Not atomic; a crash mid-write can truncate the file.
pub fn write_translations(
    translations: &BTreeMap<String, String>,
    path: &Path,
) -> Result<(), PipelineError> {
    let json = serde_json::to_string_pretty(translations)
        .map_err(|e| PipelineError::WriteError(format!("Serialization failed: {}", e)))?;

    fs::write(path, json)
        .map_err(|e| PipelineError::WriteError(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_written_file_round_trips_including_non_ascii() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translations.json");

        let mut map = BTreeMap::new();
        map.insert("señal de tráfico".to_string(), "traffic sign".to_string());
        map.insert("año".to_string(), "year".to_string());

        write_translations(&map, &path).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        // Non-ASCII stays literal, not \u-escaped
        assert!(raw.contains("señal de tráfico"));
        assert!(!raw.contains("\\u"));

        let parsed: BTreeMap<String, String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, map);
    }

    #[test]
    fn test_empty_map_writes_empty_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translations.json");

        write_translations(&BTreeMap::new(), &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_existing_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translations.json");
        fs::write(&path, "stale contents").unwrap();

        let mut map = BTreeMap::new();
        map.insert("hola".to_string(), "hello".to_string());
        write_translations(&map, &path).unwrap();

        let parsed: BTreeMap<String, String> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed["hola"], "hello");
    }
}
