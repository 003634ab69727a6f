//! Unit tests for file and directory input handling

use json2go::error::{GenerationError, GenerationErrorKind};
use json2go::generation::{generate_from_source, GenerationConfig, GenerationEngine};
use json2go::parser::directory::find_json_files;
use json2go::parser::JsonSource;
use std::fs;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

#[cfg(test)]
mod file_generation_tests {
    use super::*;

    #[test]
    fn test_generate_from_file() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, r#"{{"device": "sensor", "reading": 21.5}}"#).unwrap();

        let config = GenerationConfig::default();
        let source = JsonSource::File(tmp.path().to_path_buf());
        let data = generate_from_source(&source, &config).unwrap();

        assert!(data.content.contains("\tDevice string `json:\"device\"`"));
        assert!(data.content.contains("\tReading float64 `json:\"reading\"`"));
    }

    #[test]
    fn test_missing_file_is_parse_error() {
        let config = GenerationConfig::default();
        let source = JsonSource::File("/nonexistent/input.json".into());
        let result = generate_from_source(&source, &config);
        assert!(matches!(result, Err(GenerationError::ParseError(_))));
    }

    #[test]
    fn test_file_over_size_limit_rejected() {
        let mut tmp = NamedTempFile::new().unwrap();
        let payload = format!(r#"{{"blob": "{}"}}"#, "a".repeat(2048));
        write!(tmp, "{}", payload).unwrap();

        let config = GenerationConfig {
            size_limit: 1024,
            ..Default::default()
        };
        let engine = GenerationEngine::new(config);
        let err = engine
            .generate_from_source(&JsonSource::File(tmp.path().to_path_buf()))
            .unwrap_err();

        assert!(matches!(
            err,
            GenerationError::Generation {
                kind: GenerationErrorKind::InputTooLarge { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_directory_source_cannot_parse() {
        let tmp = tempdir().unwrap();
        let config = GenerationConfig::default();
        let source = JsonSource::Directory(tmp.path().to_path_buf());
        assert!(generate_from_source(&source, &config).is_err());
    }

    #[test]
    fn test_find_json_files_filters_and_sorts() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("b.json"), "{}").unwrap();
        fs::write(tmp.path().join("a.json"), "{}").unwrap();
        fs::write(tmp.path().join("notes.txt"), "x").unwrap();

        let files = find_json_files(tmp.path(), false).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.json"));
        assert!(files[1].ends_with("b.json"));
    }

    #[test]
    fn test_find_json_files_recursive_descends() {
        let tmp = tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("deep/deeper")).unwrap();
        fs::write(tmp.path().join("deep/deeper/c.json"), "{}").unwrap();

        let flat = find_json_files(tmp.path(), false).unwrap();
        assert!(flat.is_empty());

        let deep = find_json_files(tmp.path(), true).unwrap();
        assert_eq!(deep.len(), 1);
    }
}
