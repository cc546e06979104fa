//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains adapters for speech synthesis, audio playback, the terminal,
//! and TOML lesson storage.

pub mod adapters;
pub mod config;
pub mod persistence;

pub use adapters::*;
pub use config::{AppConfig, PacingConfig, PlaybackConfig};
pub use persistence::{LessonStoreError, TomlLessonStore};
