//! Configuration for the asset intake policy.

use serde::{Deserialize, Serialize};

/// Policy applied to every candidate asset before it is accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetPolicy {
    /// Maximum accepted file size in bytes.
    pub max_size_bytes: u64,
}

impl AssetPolicy {
    /// The configured ceiling expressed in whole megabytes.
    pub fn max_size_mb(&self) -> u64 {
        self.max_size_bytes / (1024 * 1024)
    }
}

impl Default for AssetPolicy {
    fn default() -> Self {
        Self {
            // 10 MiB, matching the upload form's advertised limit.
            max_size_bytes: 10 * 1024 * 1024,
        }
    }
}
