//! Lesson entity: an ordered set of bilingual sentence pairs

use serde::{Deserialize, Serialize};

use crate::value_objects::LanguageCode;

/// One drill item: the same sentence in the source and target language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentencePair {
    source_text: String,
    target_text: String,
}

impl SentencePair {
    /// Create a pair from the two sentence texts
    pub fn new(source_text: impl Into<String>, target_text: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            target_text: target_text.into(),
        }
    }

    /// The sentence shown to the learner first
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// The sentence that is revealed and spoken
    pub fn target_text(&self) -> &str {
        &self.target_text
    }
}

/// A lesson: sentence pairs in drill order plus the language pair they were
/// loaded for
///
/// The pair order is exactly the order the pairs were supplied in; the drill
/// walks them front to back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    source_language: LanguageCode,
    target_language: LanguageCode,
    pairs: Vec<SentencePair>,
}

impl Lesson {
    /// Create a lesson from already-ordered pairs
    pub const fn new(
        source_language: LanguageCode,
        target_language: LanguageCode,
        pairs: Vec<SentencePair>,
    ) -> Self {
        Self {
            source_language,
            target_language,
            pairs,
        }
    }

    /// The language the learner reads
    pub const fn source_language(&self) -> &LanguageCode {
        &self.source_language
    }

    /// The language that is synthesized
    pub const fn target_language(&self) -> &LanguageCode {
        &self.target_language
    }

    /// The sentence pairs in drill order
    pub fn pairs(&self) -> &[SentencePair] {
        &self.pairs
    }

    /// Number of pairs in the lesson
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the lesson has no pairs
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
