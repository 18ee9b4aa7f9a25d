//! Sinhala code points and char-indexed slicing helpers

/// Sinhala al-lakuna (U+0DCA), the vowel killer appended to a dead consonant
pub const AL_LAKUNA: char = '\u{0DCA}';

/// Romanized inherent vowel; swallowed after a consonant without emitting a mark
pub const INHERENT_VOWEL: char = 'a';

/// Collect `len` chars starting at `start` into an owned key.
/// Returns None when the window would run past the end.
pub fn char_window(chars: &[char], start: usize, len: usize) -> Option<String> {
    let end = start.checked_add(len)?;
    chars.get(start..end).map(|window| window.iter().collect())
}

/// Like [`char_window`] but truncates at the end of the slice instead of failing
pub fn char_window_clamped(chars: &[char], start: usize, len: usize) -> String {
    let start = start.min(chars.len());
    let end = start.saturating_add(len).min(chars.len());
    chars[start..end].iter().collect()
}
