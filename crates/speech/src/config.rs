//! Configuration for speech synthesis providers

use serde::{Deserialize, Serialize};

/// Configuration for the Google Translate TTS provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Base URL of the synthesis endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request slowed-down speech, useful for early listening practice
    #[serde(default)]
    pub slow: bool,
}

fn default_base_url() -> String {
    "https://translate.google.com".to_string()
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            slow: false,
        }
    }
}

impl SpeechConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a message describing the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("Synthesis base URL is required".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(format!(
                "Synthesis base URL must start with http:// or https://: {}",
                self.base_url
            ));
        }

        Ok(())
    }
}
