//! Core types for speech synthesis

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Container format of synthesized audio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    /// MPEG audio layer III
    Mp3,
    /// Waveform audio
    Wav,
    /// Ogg container (Vorbis or Opus)
    Ogg,
    /// Free Lossless Audio Codec
    Flac,
}

impl AudioFormat {
    /// Get the MIME type for this format
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::Wav => "audio/wav",
            Self::Ogg => "audio/ogg",
            Self::Flac => "audio/flac",
        }
    }

    /// Parse a `Content-Type` header value into a format
    ///
    /// Parameters after `;` are ignored, so `audio/mpeg; charset=utf-8`
    /// parses the same as `audio/mpeg`.
    #[must_use]
    pub fn from_mime_type(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or("").trim();

        match essence.to_ascii_lowercase().as_str() {
            "audio/mpeg" | "audio/mp3" => Some(Self::Mp3),
            "audio/wav" | "audio/x-wav" | "audio/wave" => Some(Self::Wav),
            "audio/ogg" => Some(Self::Ogg),
            "audio/flac" | "audio/x-flac" => Some(Self::Flac),
            _ => None,
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Mp3 => "mp3",
            Self::Wav => "wav",
            Self::Ogg => "ogg",
            Self::Flac => "flac",
        };
        write!(f, "{name}")
    }
}

/// Synthesized audio returned by a provider
#[derive(Debug, Clone)]
pub struct AudioData {
    data: Bytes,
    format: AudioFormat,
}

impl AudioData {
    /// Create audio data from raw bytes and their format
    #[must_use]
    pub const fn new(data: Bytes, format: AudioFormat) -> Self {
        Self { data, format }
    }

    /// Borrow the raw audio bytes
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the container, yielding the raw audio bytes
    #[must_use]
    pub fn into_data(self) -> Bytes {
        self.data
    }

    /// The container format of the audio
    #[must_use]
    pub const fn format(&self) -> AudioFormat {
        self.format
    }

    /// Size of the audio payload in bytes
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Whether the payload is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// MIME type matching the payload format
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }
}
