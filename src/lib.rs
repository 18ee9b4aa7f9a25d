//! Rule-based Singlish (romanized Sinhala) to Sinhala script transliteration
//!
//! ```
//! assert_eq!(singlish::transliterate("kohomadha"), "කොහොමද");
//! assert_eq!(singlish::transliterate("ka\nki"), "ක\nකි");
//! ```

pub mod config;
pub mod core;
pub mod error;

pub use crate::core::converter::{transliterate, Transliterator};
pub use crate::core::resolver::resolve;
pub use crate::core::segmenter::{LogicalGroup, VowelAdvance, WordSegmenter};
pub use crate::core::tables::{MappingTable, TableBundle, TableKind};
pub use config::TransliteratorConfig;
pub use error::{ConfigurationError, SegmentationError, TransliterationError};
