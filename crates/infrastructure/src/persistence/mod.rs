//! Persistence module
//!
//! TOML-backed storage for bilingual lesson files.

pub mod toml_lesson_store;

pub use toml_lesson_store::{LessonStoreError, TomlLessonStore};
