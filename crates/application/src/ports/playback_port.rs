//! Playback port - Interface for local audio output

use async_trait::async_trait;
use domain::AudioFormat;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for playing synthesized audio on the local device
///
/// `play` returns only after the clip has finished and the audio device has
/// been released again; at most one clip is active at a time.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlaybackPort: Send + Sync {
    /// Play one audio clip to completion
    async fn play(&self, audio_data: Vec<u8>, format: AudioFormat)
    -> Result<(), ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_playback_accepts_a_clip() {
        let mut playback = MockPlaybackPort::new();
        playback
            .expect_play()
            .withf(|data, format| !data.is_empty() && *format == AudioFormat::Mp3)
            .times(1)
            .returning(|_, _| Ok(()));

        playback.play(vec![1, 2, 3], AudioFormat::Mp3).await.unwrap();
    }
}
