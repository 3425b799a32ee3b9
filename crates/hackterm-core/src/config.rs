//! Terminal configuration.
//!
//! Every field has a default, so a partial JSON document only overrides
//! what it names:
//!
//! ```json
//! { "memory_capacity_mb": 1024, "latency": { "connect_ms": 0 } }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::memory::{MemoryState, MEM_MAX_SIZE};

/// Top-level terminal settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Memory budget available to `run`
    pub memory_capacity_mb: u32,
    /// Simulated network and process latency
    pub latency: LatencyProfile,
}

impl TerminalConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Default capacity with every delay set to zero.
    pub fn instant() -> Self {
        Self {
            latency: LatencyProfile::instant(),
            ..Self::default()
        }
    }

    pub fn memory(&self) -> MemoryState {
        MemoryState::new(self.memory_capacity_mb)
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            memory_capacity_mb: MEM_MAX_SIZE,
            latency: LatencyProfile::default(),
        }
    }
}

/// Simulated delays in milliseconds. A `*_jitter_ms` field adds a random
/// value in `[0, jitter)` on top of its base.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyProfile {
    pub connect_ms: u64,
    pub disconnect_base_ms: u64,
    pub disconnect_jitter_ms: u64,
    /// Wait before reporting an empty scan
    pub scan_empty_ms: u64,
    /// Per-host wait while scanning
    pub scan_base_ms: u64,
    pub scan_jitter_ms: u64,
    pub run_base_ms: u64,
    pub run_jitter_ms: u64,
}

impl LatencyProfile {
    pub fn instant() -> Self {
        Self {
            connect_ms: 0,
            disconnect_base_ms: 0,
            disconnect_jitter_ms: 0,
            scan_empty_ms: 0,
            scan_base_ms: 0,
            scan_jitter_ms: 0,
            run_base_ms: 0,
            run_jitter_ms: 0,
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            connect_ms: 500,
            disconnect_base_ms: 500,
            disconnect_jitter_ms: 1000,
            scan_empty_ms: 500,
            scan_base_ms: 250,
            scan_jitter_ms: 500,
            run_base_ms: 1500,
            run_jitter_ms: 2500,
        }
    }
}
