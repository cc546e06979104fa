//! Application configuration
//!
//! Split into focused sub-modules by domain:
//! - `pacing`: drill pacing pauses
//! - `playback`: audio output settling and polling
//!
//! The speech section reuses `SpeechConfig` from the speech crate.

mod pacing;
mod playback;

use serde::{Deserialize, Serialize};
use speech::SpeechConfig;

pub use pacing::PacingConfig;
pub use playback::PlaybackConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Speech synthesis configuration
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Audio playback configuration
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// Drill pacing configuration
    #[serde(default)]
    pub pacing: PacingConfig,
}

impl AppConfig {
    /// Load configuration from defaults, an optional `config` file, and
    /// `LINGUADRILL_*` environment variables, in that precedence order
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a value does not fit
    /// its field.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("speech.base_url", "https://translate.google.com")?
            .set_default("speech.slow", false)?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., LINGUADRILL_SPEECH_SLOW)
            .add_source(
                config::Environment::with_prefix("LINGUADRILL")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
