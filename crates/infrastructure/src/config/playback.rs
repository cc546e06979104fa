//! Audio playback configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settling and polling behavior of the playback adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Pause after opening the output device before playback starts
    /// (default: 1 second)
    #[serde(default = "default_settle_pause")]
    pub settle_pause_secs: u64,

    /// Interval between end-of-clip checks (default: 1 second)
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
}

const fn default_settle_pause() -> u64 {
    1
}

const fn default_poll_interval() -> u64 {
    1
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            settle_pause_secs: default_settle_pause(),
            poll_interval_secs: default_poll_interval(),
        }
    }
}

impl PlaybackConfig {
    /// Get the settle pause as a Duration
    #[must_use]
    pub const fn settle_pause(&self) -> Duration {
        Duration::from_secs(self.settle_pause_secs)
    }

    /// Get the poll interval as a Duration
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a message describing the invalid field. A zero poll interval
    /// is rejected because it would spin a blocking thread.
    pub fn validate(&self) -> Result<(), String> {
        if self.poll_interval_secs == 0 {
            return Err("Playback poll interval must be at least 1 second".to_string());
        }

        Ok(())
    }
}
