//! Singlish key -> Sinhala glyph mapping tables (JSON)

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Longest key any table may hold, in chars
pub const MAX_KEY_CHARS: usize = 4;

/// Alphabet shipped with the crate
static BUILTIN: LazyLock<TableBundle> = LazyLock::new(|| {
    TableBundle::from_json(include_str!("../../data/singlish_alphabet.json"))
        .expect("embedded Singlish alphabet must be valid")
});

/// Which of the three tables a key belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Vowels,
    Consonants,
    DependentVowels,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::Vowels => write!(f, "vowel"),
            TableKind::Consonants => write!(f, "consonant"),
            TableKind::DependentVowels => write!(f, "dependent vowel"),
        }
    }
}

/// Immutable key -> glyph map. Keys are case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MappingTable {
    entries: HashMap<String, String>,
}

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Glyph mapped to `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn validate(&self, table: TableKind) -> Result<(), ConfigurationError> {
        for (key, glyph) in &self.entries {
            if key.is_empty() {
                return Err(ConfigurationError::EmptyKey { table });
            }
            if key.chars().count() > MAX_KEY_CHARS {
                return Err(ConfigurationError::KeyTooLong {
                    table,
                    key: key.clone(),
                    max: MAX_KEY_CHARS,
                });
            }
            if key.chars().any(char::is_whitespace) {
                return Err(ConfigurationError::WhitespaceInKey {
                    table,
                    key: key.clone(),
                });
            }
            if glyph.is_empty() {
                return Err(ConfigurationError::EmptyGlyph {
                    table,
                    key: key.clone(),
                });
            }
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MappingTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// The three tables a transliterator works from.
///
/// A sub-mapping missing from the JSON source is an empty table.
/// ```json
/// {
///   "vowels": { "a": "අ", "aa": "ආ" },
///   "consonants": { "k": "ක", "th": "ත" },
///   "dependent_vowels": { "aa": "ා", "i": "ි" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableBundle {
    #[serde(default)]
    pub vowels: MappingTable,
    #[serde(default)]
    pub consonants: MappingTable,
    #[serde(default)]
    pub dependent_vowels: MappingTable,
}

impl TableBundle {
    pub fn new(
        vowels: MappingTable,
        consonants: MappingTable,
        dependent_vowels: MappingTable,
    ) -> Self {
        Self {
            vowels,
            consonants,
            dependent_vowels,
        }
    }

    /// Built-in Singlish alphabet
    pub fn builtin() -> &'static TableBundle {
        &BUILTIN
    }

    /// Parse and validate a bundle from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        let bundle: TableBundle = serde_json::from_str(json)?;
        bundle.validate()?;
        Ok(bundle)
    }

    /// Read, parse and validate a bundle from a JSON file
    pub fn from_path(path: &Path) -> Result<Self, ConfigurationError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigurationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let bundle = Self::from_json(&content)?;
        log::debug!(
            "loaded tables from {}: {} vowels, {} consonants, {} dependent vowels",
            path.display(),
            bundle.vowels.len(),
            bundle.consonants.len(),
            bundle.dependent_vowels.len()
        );
        Ok(bundle)
    }

    /// Serialize as pretty JSON, the format [`TableBundle::from_json`] reads
    pub fn to_json_pretty(&self) -> Result<String, ConfigurationError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn table(&self, kind: TableKind) -> &MappingTable {
        match kind {
            TableKind::Vowels => &self.vowels,
            TableKind::Consonants => &self.consonants,
            TableKind::DependentVowels => &self.dependent_vowels,
        }
    }

    /// Check every key is 1-4 non-whitespace chars and every glyph non-empty
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for kind in [
            TableKind::Vowels,
            TableKind::Consonants,
            TableKind::DependentVowels,
        ] {
            self.table(kind).validate(kind)?;
        }
        Ok(())
    }
}
