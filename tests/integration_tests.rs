//! Integration tests - end-to-end transliteration

use std::sync::Arc;
use std::thread;

use singlish::{
    transliterate, LogicalGroup, TableBundle, Transliterator, TransliterationError, VowelAdvance,
};

#[test]
fn test_inherent_vowel() {
    assert_eq!(transliterate("ka"), "ක"); // no al-lakuna
    assert_eq!(transliterate("ma"), "ම");
}

#[test]
fn test_word_final_consonant() {
    assert_eq!(transliterate("k"), "ක්");
    assert_eq!(transliterate("mamanam"), "මමනම්");
}

#[test]
fn test_consonant_with_vowel_sign() {
    assert_eq!(transliterate("ki"), "කි");
    assert_eq!(transliterate("koo"), "කෝ");
    assert_eq!(transliterate("kaae"), "කෑ");
}

#[test]
fn test_multi_char_consonants() {
    assert_eq!(transliterate("hondhin"), "හොඳින්"); // ndh
    assert_eq!(transliterate("thaththaa"), "තත්තා"); // th, th
}

#[test]
fn test_sentence() {
    assert_eq!(
        transliterate("ammaa kohomadha oyaata. \n mamanam hondhin"),
        "අම්මා කොහොමද ඔයාට.\nමමනම් හොඳින්"
    );
}

#[test]
fn test_two_paragraphs() {
    assert_eq!(transliterate("ka\nki"), "ක\nකි");
}

#[test]
fn test_unknown_characters_keep_position() {
    assert_eq!(transliterate("123"), "123");
    assert_eq!(transliterate("ka1ki"), "ක1කි");
    assert_eq!(transliterate("oyaata?"), "ඔයාට?");
}

#[test]
fn test_independent_vowels() {
    assert_eq!(transliterate("a"), "අ");
    assert_eq!(transliterate("aa"), "ආ");
    assert_eq!(transliterate("i"), "ඉ");
}

#[test]
fn test_failed_word_is_dropped() {
    assert_eq!(transliterate("kaoya"), "");
    assert_eq!(transliterate("ka kaoya"), "ක ");
}

#[test]
fn test_strict_mode_reports_word() {
    let transliterator = Transliterator::builtin();
    match transliterator.try_transliterate("ka\n\nki kaoya") {
        Err(TransliterationError::Segmentation {
            word, paragraph, ..
        }) => {
            assert_eq!(word, "kaoya");
            assert_eq!(paragraph, 2);
        }
        other => panic!("expected segmentation error, got {:?}", other),
    }
}

#[test]
fn test_match_length_variant() {
    let transliterator = Transliterator::builtin().with_vowel_advance(VowelAdvance::MatchLength);
    assert_eq!(transliterator.try_transliterate("kaoya").unwrap(), "කඔය");
}

#[test]
fn test_segmenter_exposes_groups() {
    let transliterator = Transliterator::builtin();
    let groups = transliterator.segmenter().segment("ammaa").unwrap();
    let texts: Vec<&str> = groups.iter().map(LogicalGroup::as_str).collect();
    assert_eq!(texts, vec!["a", "ම්", "ම", "ා"]);
    assert_eq!(singlish::resolve(&groups, transliterator.tables()), "අම්මා");
}

#[test]
fn test_custom_bundle_from_json() {
    let tables = TableBundle::from_json(
        r#"{
            "vowels": {"a": "അ"},
            "consonants": {"k": "ക", "m": "മ"},
            "dependent_vowels": {"i": "ി"}
        }"#,
    )
    .unwrap();
    let transliterator = Transliterator::new(tables).unwrap();
    // al-lakuna is appended regardless of the configured script
    assert_eq!(transliterator.transliterate("kimi"), "കിമി");
    assert_eq!(transliterator.transliterate("ak"), "അക්");
}

#[test]
fn test_shared_between_threads() {
    let transliterator = Arc::new(Transliterator::builtin());
    let inputs = ["ammaa", "kohomadha", "oyaata", "hondhin"];

    let handles: Vec<_> = inputs
        .iter()
        .map(|&input| {
            let transliterator = Arc::clone(&transliterator);
            thread::spawn(move || transliterator.transliterate(input))
        })
        .collect();

    let outputs: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(outputs, vec!["අම්මා", "කොහොමද", "ඔයාට", "හොඳින්"]);
}
