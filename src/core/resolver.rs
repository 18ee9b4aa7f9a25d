//! Logical group -> glyph resolution

use crate::core::segmenter::LogicalGroup;
use crate::core::tables::TableBundle;

/// Resolve one group: vowel table first, then vowel signs, else the text itself.
///
/// The order matters for keys present in both tables ("aa" is ආ, not ා).
pub fn resolve_group<'a>(group: &'a LogicalGroup, tables: &'a TableBundle) -> &'a str {
    let text = group.as_str();
    tables
        .vowels
        .get(text)
        .or_else(|| tables.dependent_vowels.get(text))
        .unwrap_or(text)
}

/// Concatenate the resolved groups of one word
pub fn resolve(groups: &[LogicalGroup], tables: &TableBundle) -> String {
    groups
        .iter()
        .map(|group| resolve_group(group, tables))
        .collect()
}
