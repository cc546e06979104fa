//! Value Objects - Immutable, identity-less domain primitives

mod audio_format;
mod language_code;
mod run_config;

pub use audio_format::AudioFormat;
pub use language_code::LanguageCode;
pub use run_config::RunConfig;
