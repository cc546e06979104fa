//! TOML-backed lesson storage
//!
//! A lesson file is a table of tables. Each top-level entry is one sentence
//! pair, keyed by language code:
//!
//! ```toml
//! [greeting]
//! de-DE = "Guten Morgen!"
//! it-IT = "Buongiorno!"
//! ```
//!
//! Entries are drilled in file order, which is why the `toml` crate is used
//! with its `preserve_order` feature.

use application::error::ApplicationError;
use application::ports::LessonStorePort;
use async_trait::async_trait;
use domain::{LanguageCode, Lesson, SentencePair};
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Built-in German to Italian pairs used when no lesson file is given
const FALLBACK_PAIRS: [(&str, &str); 4] = [
    (
        "Guten Morgen! Ich habe den 67. Platz erreicht.",
        "Buongiorno! Ho raggiunto il sessantasettesimo posto.",
    ),
    ("Ich habe ein Buch gelesen.", "Ho letto un libro."),
    ("Ein Wasser, bitte.", "Un'acqua, per favore."),
    ("Schönen Nachmittag!", "Buon pomeriggio!"),
];

/// Lesson storage errors
#[derive(Debug, Error)]
pub enum LessonStoreError {
    #[error("Failed to read lesson file {path}: {source}")]
    FileAccess {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse lesson file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Lesson entry '{entry}' is not a table")]
    InvalidEntry { entry: String },

    #[error("Lesson entry '{entry}' is missing text for '{key}'")]
    MissingKey { entry: String, key: String },
}

/// Loads bilingual lessons from TOML files
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlLessonStore;

impl TomlLessonStore {
    /// Create a new lesson store
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LessonStorePort for TomlLessonStore {
    #[instrument(skip(self, path), fields(source = %source, target = %target))]
    async fn load(
        &self,
        path: Option<String>,
        source: LanguageCode,
        target: LanguageCode,
    ) -> Result<Lesson, ApplicationError> {
        let Some(path) = path.filter(|p| !p.is_empty()) else {
            debug!("No lesson file given, using the built-in pairs");
            return Ok(fallback_lesson(source, target));
        };

        let raw = tokio::fs::read_to_string(&path).await.map_err(|source| {
            map_store_error(LessonStoreError::FileAccess {
                path: path.clone(),
                source,
            })
        })?;

        let lesson = parse_lesson(&raw, &path, source, target).map_err(map_store_error)?;

        info!(path = %path, pairs = lesson.len(), "Lesson loaded");
        Ok(lesson)
    }
}

/// Build the built-in lesson
///
/// The pairs are always German to Italian; the requested codes are still
/// recorded on the lesson so downstream synthesis follows the run flags.
fn fallback_lesson(source: LanguageCode, target: LanguageCode) -> Lesson {
    let pairs = FALLBACK_PAIRS
        .iter()
        .map(|(source_text, target_text)| SentencePair::new(*source_text, *target_text))
        .collect();

    Lesson::new(source, target, pairs)
}

/// Parse raw TOML into a lesson, taking the entries in file order
fn parse_lesson(
    raw: &str,
    path: &str,
    source: LanguageCode,
    target: LanguageCode,
) -> Result<Lesson, LessonStoreError> {
    let table: toml::Table = raw.parse().map_err(|source| LessonStoreError::Parse {
        path: path.to_string(),
        source,
    })?;

    let mut pairs = Vec::with_capacity(table.len());
    for (entry, value) in &table {
        let Some(texts) = value.as_table() else {
            return Err(LessonStoreError::InvalidEntry {
                entry: entry.clone(),
            });
        };

        let source_text = required_text(texts, entry, source.as_str())?;
        let target_text = required_text(texts, entry, target.as_str())?;

        pairs.push(SentencePair::new(source_text, target_text));
    }

    Ok(Lesson::new(source, target, pairs))
}

fn required_text(
    texts: &toml::Table,
    entry: &str,
    key: &str,
) -> Result<String, LessonStoreError> {
    match texts.get(key).and_then(toml::Value::as_str) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(LessonStoreError::MissingKey {
            entry: entry.to_string(),
            key: key.to_string(),
        }),
    }
}

fn map_store_error(err: LessonStoreError) -> ApplicationError {
    ApplicationError::LessonLoad(err.to_string())
}
