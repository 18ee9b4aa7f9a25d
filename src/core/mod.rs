//! Singlish -> Sinhala transliteration core

pub mod converter;
pub mod resolver;
pub mod segmenter;
pub mod tables;
pub mod unicode;
