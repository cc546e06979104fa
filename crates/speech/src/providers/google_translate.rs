//! Google Translate TTS provider implementation
//!
//! Uses the public `translate_tts` endpoint of the Google Translate web
//! frontend. The endpoint needs no API key but only accepts short inputs
//! and answers with MP3 audio.

use crate::{
    config::SpeechConfig,
    error::SpeechError,
    ports::TextToSpeech,
    types::{AudioData, AudioFormat},
};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};

/// Client identifier the endpoint expects for unauthenticated requests
const TTS_CLIENT: &str = "tw-ob";

/// Speed value the endpoint maps to its slowed-down voice
const SLOW_SPEED: &str = "0.24";

/// The endpoint rejects or truncates inputs above this many characters
const MAX_TEXT_LEN: usize = 200;

/// Speech synthesis via the Google Translate web endpoint
#[derive(Debug, Clone)]
pub struct GoogleTranslateProvider {
    client: Client,
    config: SpeechConfig,
}

impl GoogleTranslateProvider {
    /// Create a new provider with the given configuration
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid
    /// or the HTTP client cannot be created.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        // No request timeout, the endpoint can be slow on longer sentences.
        let client = Client::builder()
            .build()
            .map_err(|e| SpeechError::Configuration(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    fn tts_url(&self) -> String {
        format!("{}/translate_tts", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl TextToSpeech for GoogleTranslateProvider {
    #[instrument(skip(self, text), fields(text_len = text.len(), language = %language))]
    async fn synthesize(&self, text: &str, language: &str) -> Result<AudioData, SpeechError> {
        if text.is_empty() {
            return Err(SpeechError::SynthesisFailed(
                "Text cannot be empty".to_string(),
            ));
        }

        // The limit is in characters, not UTF-8 bytes.
        let text_chars = text.chars().count();
        if text_chars > MAX_TEXT_LEN {
            return Err(SpeechError::SynthesisFailed(format!(
                "Text too long: {text_chars} characters exceeds {MAX_TEXT_LEN} limit"
            )));
        }

        if language.is_empty() {
            return Err(SpeechError::SynthesisFailed(
                "Language cannot be empty".to_string(),
            ));
        }

        debug!(slow = self.config.slow, "Requesting speech synthesis");

        let mut request = self.client.get(self.tts_url()).query(&[
            ("ie", "UTF-8"),
            ("q", text),
            ("tl", language),
            ("client", TTS_CLIENT),
        ]);

        if self.config.slow {
            request = request.query(&[("ttsspeed", SLOW_SPEED)]);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Speech synthesis request rejected");

            // The endpoint answers 404 (sometimes 400) for unknown `tl` codes.
            return Err(match status.as_u16() {
                400 | 404 => SpeechError::UnsupportedLanguage(language.to_string()),
                429 => SpeechError::RateLimited,
                500..=599 => SpeechError::ServiceUnavailable(format!("HTTP {status}")),
                _ => SpeechError::SynthesisFailed(format!("HTTP {status}: {error_body}")),
            });
        }

        let format = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(AudioFormat::from_mime_type)
            .unwrap_or(AudioFormat::Mp3);

        let data = response.bytes().await?;

        if data.is_empty() {
            return Err(SpeechError::InvalidResponse(
                "empty audio payload".to_string(),
            ));
        }

        debug!(
            bytes = data.len(),
            format = %format,
            "Speech synthesis complete"
        );

        Ok(AudioData::new(data, format))
    }

    fn engine_name(&self) -> &str {
        "google-translate"
    }
}
