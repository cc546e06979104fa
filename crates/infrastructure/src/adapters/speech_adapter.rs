//! Speech adapter - Implements SpeechPort using the speech crate

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{SpeechPort, SynthesisResult};
use async_trait::async_trait;
use domain::AudioFormat;
use speech::{
    AudioFormat as SpeechAudioFormat, GoogleTranslateProvider, SpeechConfig, SpeechError,
    TextToSpeech,
};
use tracing::{debug, instrument};

/// Adapter for speech synthesis using the speech crate
pub struct SpeechAdapter {
    provider: Arc<GoogleTranslateProvider>,
}

impl std::fmt::Debug for SpeechAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechAdapter")
            .field("provider", &"GoogleTranslateProvider")
            .finish()
    }
}

impl SpeechAdapter {
    /// Create a new speech adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the provider fails to initialize.
    pub fn new(config: SpeechConfig) -> Result<Self, ApplicationError> {
        let provider = GoogleTranslateProvider::new(config)
            .map_err(|e: SpeechError| ApplicationError::Configuration(e.to_string()))?;

        Ok(Self {
            provider: Arc::new(provider),
        })
    }

    /// Convert speech crate AudioFormat to domain AudioFormat
    const fn speech_to_domain_format(format: SpeechAudioFormat) -> AudioFormat {
        match format {
            SpeechAudioFormat::Mp3 => AudioFormat::Mp3,
            SpeechAudioFormat::Wav => AudioFormat::Wav,
            SpeechAudioFormat::Ogg => AudioFormat::Ogg,
            SpeechAudioFormat::Flac => AudioFormat::Flac,
        }
    }

    /// Map speech error to application error
    fn map_error(err: SpeechError) -> ApplicationError {
        match err {
            SpeechError::Configuration(e) => ApplicationError::Configuration(e),
            SpeechError::RateLimited => ApplicationError::RateLimited,
            SpeechError::InvalidResponse(e) => {
                ApplicationError::Internal(format!("Invalid response: {e}"))
            },
            SpeechError::ConnectionFailed(_)
            | SpeechError::RequestFailed(_)
            | SpeechError::SynthesisFailed(_)
            | SpeechError::UnsupportedLanguage(_)
            | SpeechError::ServiceUnavailable(_) => ApplicationError::Synthesis(err.to_string()),
        }
    }
}

#[async_trait]
impl SpeechPort for SpeechAdapter {
    #[instrument(skip(self, text), fields(text_len = text.len(), language = %language))]
    async fn synthesize(
        &self,
        text: String,
        language: String,
    ) -> Result<SynthesisResult, ApplicationError> {
        let audio = self
            .provider
            .synthesize(&text, &language)
            .await
            .map_err(Self::map_error)?;

        let format = Self::speech_to_domain_format(audio.format());

        debug!(
            engine = self.provider.engine_name(),
            audio_size = audio.size_bytes(),
            format = ?format,
            "Synthesis complete"
        );

        Ok(SynthesisResult {
            audio_data: audio.into_data().into(),
            format,
        })
    }
}
