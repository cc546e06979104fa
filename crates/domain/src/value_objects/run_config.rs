//! Validated run parameters for a drill session
//!
//! Bundles the source language, target language, and lesson file path after
//! checking them in a fixed order, so a run that starts is known to be
//! well-formed.
//!
//! # Examples
//!
//! ```
//! use domain::RunConfig;
//!
//! let config = RunConfig::new("de-DE", "it-IT", "data/conjugation.toml").unwrap();
//! assert_eq!(config.source_language().as_str(), "de-DE");
//! assert_eq!(config.lesson_file(), "data/conjugation.toml");
//!
//! // Identical languages make no sense for a drill
//! assert!(RunConfig::new("de-DE", "de-DE", "x.toml").is_err());
//! ```

use crate::errors::DomainError;
use crate::value_objects::LanguageCode;

/// Validated parameters for one drill run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    source_language: LanguageCode,
    target_language: LanguageCode,
    lesson_file: String,
}

impl RunConfig {
    /// Validate run parameters and build the configuration
    ///
    /// The rules are applied in a fixed order and the first violation wins:
    ///
    /// 1. `lesson_file` must end with the literal suffix `.toml`
    /// 2. both language codes must be non-empty
    /// 3. source and target must differ (exact string comparison)
    /// 4. both codes must be in the supported set, source checked first
    ///
    /// The path check is purely lexical; whether the file exists is the
    /// loader's concern.
    ///
    /// # Errors
    ///
    /// Returns the [`DomainError`] for the first rule violated.
    pub fn new(
        source_lang: &str,
        target_lang: &str,
        lesson_file: &str,
    ) -> Result<Self, DomainError> {
        if !lesson_file.ends_with(".toml") {
            return Err(DomainError::InvalidLessonFile(lesson_file.to_string()));
        }
        if source_lang.is_empty() || target_lang.is_empty() {
            return Err(DomainError::MissingLanguage);
        }
        if source_lang == target_lang {
            return Err(DomainError::IdenticalLanguages(source_lang.to_string()));
        }
        let source_language = LanguageCode::new(source_lang)?;
        let target_language = LanguageCode::new(target_lang)?;

        Ok(Self {
            source_language,
            target_language,
            lesson_file: lesson_file.to_string(),
        })
    }

    /// The language the learner reads
    pub const fn source_language(&self) -> &LanguageCode {
        &self.source_language
    }

    /// The language that is revealed and spoken
    pub const fn target_language(&self) -> &LanguageCode {
        &self.target_language
    }

    /// Path of the lesson file to load
    pub fn lesson_file(&self) -> &str {
        &self.lesson_file
    }
}
