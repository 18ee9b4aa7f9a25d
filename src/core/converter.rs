//! Singlish -> Sinhala text transliterator

use std::sync::LazyLock;

use crate::config::TransliteratorConfig;
use crate::core::resolver::resolve;
use crate::core::segmenter::{VowelAdvance, WordSegmenter};
use crate::core::tables::TableBundle;
use crate::error::{ConfigurationError, SegmentationError, TransliterationError};

static BUILTIN: LazyLock<Transliterator> = LazyLock::new(Transliterator::builtin);

/// Transliterate text with the built-in alphabet.
/// Words that cannot be segmented come out empty.
pub fn transliterate(text: &str) -> String {
    BUILTIN.transliterate(text)
}

/// Whole-text transliterator over immutable tables.
///
/// Holds no mutable state, so one instance can be shared between threads.
#[derive(Debug, Clone)]
pub struct Transliterator {
    tables: TableBundle,
    vowel_advance: VowelAdvance,
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Transliterator {
    /// Validate `tables` and build a transliterator over them
    pub fn new(tables: TableBundle) -> Result<Self, ConfigurationError> {
        tables.validate()?;
        Ok(Self {
            tables,
            vowel_advance: VowelAdvance::default(),
        })
    }

    /// Transliterator over the built-in Singlish alphabet
    pub fn builtin() -> Self {
        Self {
            tables: TableBundle::builtin().clone(),
            vowel_advance: VowelAdvance::default(),
        }
    }

    /// Build from settings, loading the table file when one is configured
    pub fn from_config(config: &TransliteratorConfig) -> Result<Self, ConfigurationError> {
        let transliterator = match &config.tables_path {
            Some(path) => Self::new(TableBundle::from_path(path)?)?,
            None => Self::builtin(),
        };
        Ok(transliterator.with_vowel_advance(config.vowel_advance))
    }

    pub fn with_vowel_advance(mut self, vowel_advance: VowelAdvance) -> Self {
        self.vowel_advance = vowel_advance;
        self
    }

    pub fn tables(&self) -> &TableBundle {
        &self.tables
    }

    pub fn vowel_advance(&self) -> VowelAdvance {
        self.vowel_advance
    }

    pub fn segmenter(&self) -> WordSegmenter<'_> {
        WordSegmenter::new(&self.tables).with_vowel_advance(self.vowel_advance)
    }

    /// Segment and resolve a single word
    pub fn transliterate_word(&self, word: &str) -> Result<String, SegmentationError> {
        let groups = self.segmenter().segment(word)?;
        Ok(resolve(&groups, &self.tables))
    }

    /// Transliterate text, keeping paragraph (newline) and word boundaries.
    ///
    /// A word that fails segmentation becomes an empty string and is logged.
    pub fn transliterate(&self, text: &str) -> String {
        match self.convert_text(text, false) {
            Ok(output) => output,
            Err(e) => {
                log::error!("transliteration aborted: {}", e);
                String::new()
            }
        }
    }

    /// Like [`Transliterator::transliterate`] but the first failing word
    /// aborts the whole call
    pub fn try_transliterate(&self, text: &str) -> Result<String, TransliterationError> {
        self.convert_text(text, true)
    }

    fn convert_text(&self, text: &str, strict: bool) -> Result<String, TransliterationError> {
        let segmenter = self.segmenter();
        let mut paragraphs = Vec::new();

        for (index, paragraph) in text.split('\n').enumerate() {
            let mut words = Vec::new();
            for word in paragraph.split_whitespace() {
                match segmenter.segment(word) {
                    Ok(groups) => words.push(resolve(&groups, &self.tables)),
                    Err(source) if strict => {
                        return Err(TransliterationError::Segmentation {
                            word: word.to_string(),
                            paragraph: index,
                            source,
                        });
                    }
                    Err(e) => {
                        log::warn!("dropping word {:?} in paragraph {}: {}", word, index, e);
                        words.push(String::new());
                    }
                }
            }
            paragraphs.push(words.join(" "));
        }

        Ok(paragraphs.join("\n"))
    }
}
