//! Word segmentation into logical groups
//!
//! A word is scanned left to right. At every cursor position the longest
//! consonant key wins first; a consonant is then either followed by a vowel
//! sign, carries the inherent vowel (a literal `a`, swallowed), or is killed
//! with al-lakuna. Independent vowels are looked for after the consonant step.
//!
//! The output is a sequence of [`LogicalGroup`]s which the resolver maps to
//! glyphs a second time (see [`crate::core::resolver`]).

use std::fmt;
use std::mem;

use serde::{Deserialize, Serialize};

use crate::core::tables::TableBundle;
use crate::core::unicode::{char_window, char_window_clamped, AL_LAKUNA, INHERENT_VOWEL};
use crate::error::SegmentationError;

/// Longest consonant key tried at a cursor position
const CONSONANT_SCAN: usize = 4;
/// Longest vowel sign key tried after a consonant
const DEPENDENT_VOWEL_SCAN: usize = 3;
/// Longest independent vowel key tried
const VOWEL_SCAN: usize = 3;
/// Lookahead used to decide whether another cluster starts
const CLUSTER_LOOKAHEAD: usize = 4;

/// How the cursor moves after an independent vowel match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VowelAdvance {
    /// Rule-set behaviour: a vowel is only looked for when at least one char
    /// follows the candidate, the glyph is taken from the 3-char window at the
    /// cursor and the cursor always moves 3 chars. A window that is not a
    /// vowel key fails the whole word.
    #[default]
    Fixed,
    /// Use the matched key's glyph and advance by the matched length
    MatchLength,
}

/// One segment of a word: a resolved glyph, a raw key waiting for the
/// resolver, literal unknown text, or a concatenation of those. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LogicalGroup(String);

impl LogicalGroup {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for LogicalGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LogicalGroup {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl From<String> for LogicalGroup {
    fn from(text: String) -> Self {
        Self(text)
    }
}

/// Splits single words into logical groups against borrowed tables
#[derive(Debug, Clone, Copy)]
pub struct WordSegmenter<'t> {
    tables: &'t TableBundle,
    vowel_advance: VowelAdvance,
}

impl<'t> WordSegmenter<'t> {
    pub fn new(tables: &'t TableBundle) -> Self {
        Self {
            tables,
            vowel_advance: VowelAdvance::default(),
        }
    }

    pub fn with_vowel_advance(mut self, vowel_advance: VowelAdvance) -> Self {
        self.vowel_advance = vowel_advance;
        self
    }

    pub fn vowel_advance(&self) -> VowelAdvance {
        self.vowel_advance
    }

    /// Segment one word (no whitespace expected).
    ///
    /// Empty groups appear whenever a consonant starts while the accumulator
    /// is empty; they resolve to nothing. Any failure discards the word.
    pub fn segment(&self, word: &str) -> Result<Vec<LogicalGroup>, SegmentationError> {
        let chars: Vec<char> = word.chars().collect();
        let mut state = Scan {
            chars: &chars,
            cursor: 0,
            current: String::new(),
            groups: Vec::new(),
        };

        while state.cursor < chars.len() {
            self.consonant_step(&mut state);
            self.vowel_step(&mut state)?;
        }

        if !state.current.is_empty() {
            state.flush();
        }
        Ok(state.groups)
    }

    /// Consonant, then vowel sign / inherent vowel / al-lakuna / literal
    fn consonant_step(&self, state: &mut Scan<'_>) {
        let tables = self.tables;
        let Some((len, glyph)) = longest_match(state.chars, state.cursor, CONSONANT_SCAN, |key| {
            tables.consonants.get(key)
        }) else {
            state.push_literal();
            return;
        };

        state.flush();
        state.current.push_str(glyph);
        state.cursor += len;

        if state.at_end() {
            // word-final consonant is dead
            state.current.push(AL_LAKUNA);
            return;
        }

        if let Some((len, sign)) =
            longest_match(state.chars, state.cursor, DEPENDENT_VOWEL_SCAN, |key| {
                tables.dependent_vowels.get(key)
            })
        {
            state.flush();
            state.current.push_str(sign);
            state.cursor += len;
        } else if state.chars[state.cursor] == INHERENT_VOWEL {
            state.cursor += 1;
        } else if self.starts_cluster(state.chars, state.cursor) {
            state.current.push(AL_LAKUNA);
        } else {
            state.push_literal();
        }
    }

    fn vowel_step(&self, state: &mut Scan<'_>) -> Result<(), SegmentationError> {
        match self.vowel_advance {
            VowelAdvance::Fixed => self.fixed_vowel_step(state),
            VowelAdvance::MatchLength => {
                self.matched_vowel_step(state);
                Ok(())
            }
        }
    }

    fn fixed_vowel_step(&self, state: &mut Scan<'_>) -> Result<(), SegmentationError> {
        let n = state.chars.len();
        let start = state.cursor;
        let found = (1..=VOWEL_SCAN).rev().any(|len| {
            start + len < n
                && char_window(state.chars, start, len)
                    .is_some_and(|key| self.tables.vowels.contains(&key))
        });
        if !found {
            return Ok(());
        }

        state.flush();
        let window = char_window_clamped(state.chars, start, VOWEL_SCAN);
        let glyph = self.tables.vowels.get(&window).ok_or_else(|| {
            SegmentationError::UnmappedVowelWindow {
                window: window.clone(),
                position: start,
            }
        })?;
        state.current.push_str(glyph);
        state.cursor = (start + VOWEL_SCAN).min(n);
        Ok(())
    }

    fn matched_vowel_step(&self, state: &mut Scan<'_>) {
        let tables = self.tables;
        if let Some((len, glyph)) = longest_match(state.chars, state.cursor, VOWEL_SCAN, |key| {
            tables.vowels.get(key)
        }) {
            state.flush();
            state.current.push_str(glyph);
            state.cursor += len;
        }
    }

    /// Whether any of the next 1-4 chars form a consonant or vowel key
    fn starts_cluster(&self, chars: &[char], start: usize) -> bool {
        (1..=CLUSTER_LOOKAHEAD).any(|len| {
            char_window(chars, start, len).is_some_and(|key| {
                self.tables.consonants.contains(&key) || self.tables.vowels.contains(&key)
            })
        })
    }
}

/// Cursor and accumulator for one word
struct Scan<'w> {
    chars: &'w [char],
    cursor: usize,
    current: String,
    groups: Vec<LogicalGroup>,
}

impl Scan<'_> {
    fn at_end(&self) -> bool {
        self.cursor >= self.chars.len()
    }

    /// Move the accumulator into the output, even when empty
    fn flush(&mut self) {
        let group = mem::take(&mut self.current);
        self.groups.push(LogicalGroup(group));
    }

    /// Append the char under the cursor verbatim
    fn push_literal(&mut self) {
        self.current.push(self.chars[self.cursor]);
        self.cursor += 1;
    }
}

/// Longest key of at most `max_len` chars at `start` accepted by `lookup`
fn longest_match<'a>(
    chars: &[char],
    start: usize,
    max_len: usize,
    lookup: impl Fn(&str) -> Option<&'a str>,
) -> Option<(usize, &'a str)> {
    (1..=max_len).rev().find_map(|len| {
        let key = char_window(chars, start, len)?;
        lookup(&key).map(|glyph| (len, glyph))
    })
}
