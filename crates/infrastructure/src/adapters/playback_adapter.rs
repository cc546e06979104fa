//! Playback adapter - Implements PlaybackPort using rodio
//!
//! Playback is blocking by nature (the audio device is held for the whole
//! clip), so the rodio work runs on the blocking thread pool and the async
//! caller just awaits it.

use std::io::Cursor;
use std::thread;
use std::time::Duration;

use application::error::ApplicationError;
use application::ports::PlaybackPort;
use async_trait::async_trait;
use domain::AudioFormat;
use rodio::{Decoder, OutputStream, Sink};
use tracing::{debug, instrument};

use crate::config::PlaybackConfig;

/// Adapter for local audio playback using rodio
#[derive(Debug, Clone)]
pub struct PlaybackAdapter {
    config: PlaybackConfig,
}

impl PlaybackAdapter {
    /// Create a new playback adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the playback configuration is invalid.
    pub fn new(config: PlaybackConfig) -> Result<Self, ApplicationError> {
        config.validate().map_err(ApplicationError::Configuration)?;

        Ok(Self { config })
    }
}

#[async_trait]
impl PlaybackPort for PlaybackAdapter {
    #[instrument(skip(self, audio_data), fields(data_size = audio_data.len(), format = ?format))]
    async fn play(&self, audio_data: Vec<u8>, format: AudioFormat) -> Result<(), ApplicationError> {
        if audio_data.is_empty() {
            return Err(ApplicationError::Playback(
                "No audio data to play".to_string(),
            ));
        }

        debug!("Starting audio playback");

        let settle_pause = self.config.settle_pause();
        let poll_interval = self.config.poll_interval();

        tokio::task::spawn_blocking(move || play_blocking(audio_data, settle_pause, poll_interval))
            .await
            .map_err(|e| ApplicationError::Internal(format!("Playback task failed: {e}")))??;

        debug!("Audio playback finished");
        Ok(())
    }
}

/// Play one clip to completion on the current thread
///
/// The output stream stays open until this function returns, which is what
/// releases the audio device again.
fn play_blocking(
    audio_data: Vec<u8>,
    settle_pause: Duration,
    poll_interval: Duration,
) -> Result<(), ApplicationError> {
    let (_stream, handle) = OutputStream::try_default().map_err(map_stream_error)?;
    let sink = Sink::try_new(&handle).map_err(map_play_error)?;

    let source = Decoder::new(Cursor::new(audio_data)).map_err(map_decoder_error)?;
    debug!("Audio clip loaded");

    // Let the output device settle before the first samples hit it,
    // otherwise the start of the clip gets clipped.
    sink.pause();
    sink.append(source);
    thread::sleep(settle_pause);
    sink.play();
    debug!("Playback started");

    while !sink.empty() {
        thread::sleep(poll_interval);
    }

    sink.stop();
    debug!("Playback finished, releasing the audio device");
    Ok(())
}

fn map_stream_error(err: rodio::StreamError) -> ApplicationError {
    ApplicationError::Playback(format!("Failed to open audio output: {err}"))
}

fn map_play_error(err: rodio::PlayError) -> ApplicationError {
    ApplicationError::Playback(format!("Failed to create audio sink: {err}"))
}

fn map_decoder_error(err: rodio::decoder::DecoderError) -> ApplicationError {
    ApplicationError::Playback(format!("Failed to decode audio: {err}"))
}
