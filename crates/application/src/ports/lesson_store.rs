//! Lesson store port - Interface for loading lessons

use async_trait::async_trait;
use domain::{LanguageCode, Lesson};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for retrieving lessons
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LessonStorePort: Send + Sync {
    /// Load the lesson for a language pair
    ///
    /// # Arguments
    /// * `path` - Lesson file path; `None` or an empty string selects the
    ///   built-in fallback lesson
    /// * `source` - Language the learner reads
    /// * `target` - Language that is revealed and spoken
    ///
    /// # Returns
    /// The lesson with its pairs in drill order.
    async fn load(
        &self,
        path: Option<String>,
        source: LanguageCode,
        target: LanguageCode,
    ) -> Result<Lesson, ApplicationError>;
}
