//! Domain-level errors

use thiserror::Error;

use crate::value_objects::LanguageCode;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Lesson file path does not name a TOML file
    #[error("Invalid lesson file type (expected .toml): {0}")]
    InvalidLessonFile(String),

    /// A required language code was empty
    #[error("Source and target language codes are required")]
    MissingLanguage,

    /// Source and target language are the same
    #[error("Source and target language must differ: got '{0}' for both")]
    IdenticalLanguages(String),

    /// Language code outside the supported set
    #[error("Unsupported language code '{code}'. Supported codes: {supported}")]
    UnsupportedLanguage { code: String, supported: String },
}

impl DomainError {
    /// Create an unsupported-language error listing the full supported set
    pub fn unsupported_language(code: impl Into<String>) -> Self {
        Self::UnsupportedLanguage {
            code: code.into(),
            supported: LanguageCode::supported_codes().join(", "),
        }
    }
}
