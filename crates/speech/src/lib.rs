//! Speech synthesis - Text-to-Speech abstractions
//!
//! Provides the trait and implementation for turning sentences into audio:
//! - `TextToSpeech` - Synthesize speech from text (TTS)
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` module defines the trait (port)
//! - `providers` module contains concrete implementations (adapters)
//!
//! # Supported Providers
//!
//! - Google Translate TTS (the public `translate_tts` endpoint, no API key)
//!
//! # Example
//!
//! ```ignore
//! use speech::{GoogleTranslateProvider, SpeechConfig, TextToSpeech};
//!
//! let provider = GoogleTranslateProvider::new(SpeechConfig::default())?;
//!
//! // Synthesize speech
//! let audio = provider.synthesize("Buongiorno!", "it").await?;
//! println!("Got {} bytes of {}", audio.size_bytes(), audio.format());
//! ```

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;
pub mod types;

pub use config::SpeechConfig;
pub use error::SpeechError;
pub use ports::TextToSpeech;
pub use providers::google_translate::GoogleTranslateProvider;
pub use types::{AudioData, AudioFormat};
