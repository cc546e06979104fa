//! Drill pacing configuration.

use std::time::Duration;

use application::services::DrillConfig;
use serde::{Deserialize, Serialize};

/// Pacing pauses for the drill cycle, in seconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacingConfig {
    /// Time to sit with the source sentence before the prompt (default: 5 seconds)
    #[serde(default = "default_source_pause")]
    pub source_pause_secs: u64,

    /// Time the revealed sentence stands alone before its audio (default: 1 second)
    #[serde(default = "default_target_pause")]
    pub target_pause_secs: u64,

    /// Rest after a pair before the next one (default: 2 seconds)
    #[serde(default = "default_between_pause")]
    pub between_pause_secs: u64,
}

const fn default_source_pause() -> u64 {
    5
}

const fn default_target_pause() -> u64 {
    1
}

const fn default_between_pause() -> u64 {
    2
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            source_pause_secs: default_source_pause(),
            target_pause_secs: default_target_pause(),
            between_pause_secs: default_between_pause(),
        }
    }
}

impl PacingConfig {
    /// Convert to the drill service pacing configuration
    #[must_use]
    pub const fn drill_config(&self) -> DrillConfig {
        DrillConfig {
            source_pause: Duration::from_secs(self.source_pause_secs),
            target_pause: Duration::from_secs(self.target_pause_secs),
            between_pause: Duration::from_secs(self.between_pause_secs),
        }
    }
}
