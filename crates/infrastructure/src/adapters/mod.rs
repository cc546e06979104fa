//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod console_adapter;
mod playback_adapter;
mod speech_adapter;

pub use console_adapter::ConsoleAdapter;
pub use playback_adapter::PlaybackAdapter;
pub use speech_adapter::SpeechAdapter;
