//! Error types for table loading, segmentation and transliteration

use std::path::PathBuf;

use thiserror::Error;

use crate::core::tables::TableKind;

/// Table bundle or configuration could not be used to build a transliterator
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// File could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid JSON for the expected schema
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{table} table contains an empty key")]
    EmptyKey { table: TableKind },

    #[error("{table} table key {key:?} is longer than {max} characters")]
    KeyTooLong {
        table: TableKind,
        key: String,
        max: usize,
    },

    /// Words never contain whitespace, so such a key could never match
    #[error("{table} table key {key:?} contains whitespace")]
    WhitespaceInKey { table: TableKind, key: String },

    #[error("{table} table maps {key:?} to an empty glyph")]
    EmptyGlyph { table: TableKind, key: String },
}

/// A single word could not be segmented
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentationError {
    /// Fixed vowel advance looked up a 3-char window that is not a vowel key
    #[error("no vowel mapped for window {window:?} at position {position}")]
    UnmappedVowelWindow { window: String, position: usize },
}

/// Strict text transliteration aborted on a word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransliterationError {
    #[error("cannot transliterate word {word:?} in paragraph {paragraph}: {source}")]
    Segmentation {
        word: String,
        paragraph: usize,
        #[source]
        source: SegmentationError,
    },
}
