//! Transliterator settings load (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::segmenter::VowelAdvance;
use crate::error::ConfigurationError;

/// Transliterator settings
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TransliteratorConfig {
    /// Table bundle to load instead of the built-in alphabet
    #[serde(default)]
    pub tables_path: Option<PathBuf>,
    /// Cursor movement after an independent vowel
    #[serde(default)]
    pub vowel_advance: VowelAdvance,
    /// Fail on the first word that cannot be segmented instead of dropping it
    #[serde(default)]
    pub strict: bool,
}

impl TransliteratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tables_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.tables_path = Some(path.into());
        self
    }

    pub fn with_vowel_advance(mut self, vowel_advance: VowelAdvance) -> Self {
        self.vowel_advance = vowel_advance;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Load settings from a JSON file
pub fn load_config(path: &Path) -> Result<TransliteratorConfig, ConfigurationError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigurationError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = serde_json::from_str(&content)?;
    log::debug!("loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TransliteratorConfig::default();
        assert_eq!(config.tables_path, None);
        assert_eq!(config.vowel_advance, VowelAdvance::Fixed);
        assert!(!config.strict);
    }

    #[test]
    fn test_builder_pattern() {
        let config = TransliteratorConfig::new()
            .with_tables_path("data/custom.json")
            .with_vowel_advance(VowelAdvance::MatchLength)
            .with_strict(true);

        assert_eq!(config.tables_path, Some(PathBuf::from("data/custom.json")));
        assert_eq!(config.vowel_advance, VowelAdvance::MatchLength);
        assert!(config.strict);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let json = r#"{"strict": true}"#;
        let config: TransliteratorConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.vowel_advance, VowelAdvance::Fixed);
        assert!(config.strict);

        let config: TransliteratorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, TransliteratorConfig::default());
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = TransliteratorConfig::new()
            .with_tables_path("alphabet.json")
            .with_vowel_advance(VowelAdvance::MatchLength);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"match_length\""));
        let parsed: TransliteratorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("singlish.json");
        fs::write(&path, r#"{"vowel_advance": "match_length"}"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.vowel_advance, VowelAdvance::MatchLength);
    }

    #[test]
    fn test_load_config_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            load_config(&missing),
            Err(ConfigurationError::Io { .. })
        ));

        let bad = dir.path().join("bad.json");
        fs::write(&bad, r#"{"vowel_advance": "sometimes"}"#).unwrap();
        assert!(matches!(load_config(&bad), Err(ConfigurationError::Json(_))));
    }
}
