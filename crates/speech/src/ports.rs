//! Port definitions for speech synthesis
//!
//! Providers implement these traits; callers depend only on the traits,
//! so engines can be swapped without touching the drill logic.

use crate::{error::SpeechError, types::AudioData};
use async_trait::async_trait;

/// Port for Text-to-Speech synthesis
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Synthesize speech from text
    ///
    /// The `language` is the synthesis code the engine expects, e.g. `it`
    /// or `de`, not a full BCP 47 tag.
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if the text is rejected, the language is not
    /// spoken by the engine, or the service cannot be reached.
    async fn synthesize(&self, text: &str, language: &str) -> Result<AudioData, SpeechError>;

    /// Name of the underlying engine, for logging
    fn engine_name(&self) -> &str;
}
