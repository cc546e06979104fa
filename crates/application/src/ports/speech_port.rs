//! Speech port - Interface for text-to-speech synthesis

use async_trait::async_trait;
use domain::AudioFormat;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Result of a speech synthesis operation
#[derive(Debug, Clone)]
pub struct SynthesisResult {
    /// Generated audio data
    pub audio_data: Vec<u8>,
    /// Format of the audio
    pub format: AudioFormat,
}

/// Port for speech synthesis
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeechPort: Send + Sync {
    /// Synthesize speech from text (Text-to-Speech)
    ///
    /// # Arguments
    /// * `text` - Text to synthesize
    /// * `language` - Two-letter synthesis code (e.g., "it", "de")
    ///
    /// # Returns
    /// Synthesis result with the audio data and its format.
    async fn synthesize(
        &self,
        text: String,
        language: String,
    ) -> Result<SynthesisResult, ApplicationError>;
}
