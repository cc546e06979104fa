//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod console_port;
mod lesson_store;
mod playback_port;
mod speech_port;

#[cfg(test)]
pub use console_port::MockConsolePort;
pub use console_port::ConsolePort;
#[cfg(test)]
pub use lesson_store::MockLessonStorePort;
pub use lesson_store::LessonStorePort;
#[cfg(test)]
pub use playback_port::MockPlaybackPort;
pub use playback_port::PlaybackPort;
#[cfg(test)]
pub use speech_port::MockSpeechPort;
pub use speech_port::{SpeechPort, SynthesisResult};
