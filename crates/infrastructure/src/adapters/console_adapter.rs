//! Console adapter - Implements ConsolePort over stdin/stdout
//!
//! Generic over the underlying streams so tests can drive it with
//! in-memory buffers instead of the process console.

use std::fmt;

use application::error::ApplicationError;
use application::ports::ConsolePort;
use async_trait::async_trait;
use tokio::io::{
    self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};
use tokio::sync::Mutex;

/// Adapter for terminal I/O
pub struct ConsoleAdapter<R = BufReader<Stdin>, W = Stdout> {
    reader: Mutex<R>,
    writer: Mutex<W>,
}

impl<R, W> fmt::Debug for ConsoleAdapter<R, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleAdapter").finish_non_exhaustive()
    }
}

impl ConsoleAdapter {
    /// Create an adapter wired to the process stdin and stdout
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(BufReader::new(io::stdin()), io::stdout())
    }
}

impl Default for ConsoleAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, W> ConsoleAdapter<R, W> {
    /// Create an adapter over arbitrary input and output streams
    pub fn from_parts(reader: R, writer: W) -> Self {
        Self {
            reader: Mutex::new(reader),
            writer: Mutex::new(writer),
        }
    }
}

impl<R, W> ConsoleAdapter<R, W>
where
    W: AsyncWrite + Unpin,
{
    async fn write_raw(&self, text: &str) -> Result<(), ApplicationError> {
        let mut writer = self.writer.lock().await;
        writer
            .write_all(text.as_bytes())
            .await
            .map_err(|e| ApplicationError::Console(format!("Failed to write output: {e}")))?;
        writer
            .flush()
            .await
            .map_err(|e| ApplicationError::Console(format!("Failed to flush output: {e}")))?;
        Ok(())
    }
}

#[async_trait]
impl<R, W> ConsolePort for ConsoleAdapter<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn write_line(&self, text: &str) -> Result<(), ApplicationError> {
        self.write_raw(&format!("{text}\n")).await
    }

    async fn read_line(&self, prompt: &str) -> Result<Option<String>, ApplicationError> {
        self.write_raw(prompt).await?;

        let mut buffer = String::new();
        let mut reader = self.reader.lock().await;
        let bytes_read = reader
            .read_line(&mut buffer)
            .await
            .map_err(|e| ApplicationError::Console(format!("Failed to read input: {e}")))?;

        if bytes_read == 0 {
            return Ok(None);
        }

        // Strip only the line terminator; the drill matches `exit` exactly,
        // so surrounding whitespace must survive.
        if buffer.ends_with('\n') {
            buffer.pop();
            if buffer.ends_with('\r') {
                buffer.pop();
            }
        }

        Ok(Some(buffer))
    }
}
