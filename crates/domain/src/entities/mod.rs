//! Domain entities - Objects with identity and lifecycle

mod lesson;

pub use lesson::{Lesson, SentencePair};
