//! Language code value object with validation
//!
//! Provides a validated `language-REGION` code restricted to the set of
//! languages the trainer can display and synthesize.
//!
//! # Examples
//!
//! ```
//! use domain::LanguageCode;
//!
//! // Create a valid language code
//! let code = LanguageCode::new("it-IT").unwrap();
//! assert_eq!(code.as_str(), "it-IT");
//!
//! // The primary subtag drives speech synthesis
//! assert_eq!(code.synthesis_code(), "it");
//!
//! // Codes outside the supported set are rejected
//! assert!(LanguageCode::new("xx-XX").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Language codes the trainer accepts, in display order
const SUPPORTED_CODES: [&str; 16] = [
    "de-DE", "en-US", "fr-FR", "es-ES", "it-IT", "pt-PT", "ru-RU", "ja-JP", "zh-CN", "ko-KR",
    "nl-NL", "sv-SE", "tr-TR", "pl-PL", "sr-RS", "ro-RO",
];

/// A validated language code such as `de-DE` or `it-IT`
///
/// # Examples
///
/// ```
/// use domain::LanguageCode;
///
/// let code = LanguageCode::new("zh-CN").unwrap();
/// assert_eq!(code.synthesis_code(), "zh");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode {
    value: String,
}

impl LanguageCode {
    /// Create a new language code, validating membership in the supported set
    ///
    /// Matching is exact: codes are compared byte-for-byte against the
    /// supported set, with no trimming or case folding, because the same
    /// string later selects keys in lesson files.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingLanguage`] for an empty code and
    /// [`DomainError::UnsupportedLanguage`] for anything outside the
    /// supported set.
    pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
        let value = code.into();
        if value.is_empty() {
            return Err(DomainError::MissingLanguage);
        }
        if !SUPPORTED_CODES.contains(&value.as_str()) {
            return Err(DomainError::unsupported_language(value));
        }
        Ok(Self { value })
    }

    /// Get the language code as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Get the two-letter primary subtag used for speech synthesis
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::LanguageCode;
    ///
    /// let code = LanguageCode::new("it-IT").unwrap();
    /// assert_eq!(code.synthesis_code(), "it");
    /// ```
    pub fn synthesis_code(&self) -> &str {
        self.value.split('-').next().unwrap_or("")
    }

    /// All supported language codes, in display order
    pub const fn supported_codes() -> &'static [&'static str] {
        &SUPPORTED_CODES
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for LanguageCode {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
