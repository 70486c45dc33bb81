//! Configuration for analysis clients.

use serde::{Deserialize, Serialize};

/// Configuration for the remote analysis client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the analysis service (e.g. `https://api.example.com/api`).
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl RemoteConfig {
    /// Config for the given base URL with the default timeout.
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_seconds: 30,
        }
    }
}

/// Configuration for the simulated analysis client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Artificial delay before the fabricated result resolves, in
    /// milliseconds.
    pub delay_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        // The original demo flow resolved after two seconds.
        Self { delay_ms: 2000 }
    }
}

impl SimulationConfig {
    /// Zero-delay config, used by tests.
    pub fn immediate() -> Self {
        Self { delay_ms: 0 }
    }
}
