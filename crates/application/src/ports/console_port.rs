//! Console port - Interface for learner-facing terminal I/O

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the interactive console
///
/// The drill shows sentences and blocks on learner input through this port,
/// so it can be exercised in tests without a real terminal.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ConsolePort: Send + Sync {
    /// Write one line of output
    async fn write_line(&self, text: &str) -> Result<(), ApplicationError>;

    /// Show a prompt (no trailing newline) and read one input line
    ///
    /// # Returns
    /// The line without its trailing newline, or `None` once the input
    /// stream has reached end of file.
    async fn read_line(&self, prompt: &str) -> Result<Option<String>, ApplicationError>;
}
