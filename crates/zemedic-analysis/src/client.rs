//! Analysis client trait.

use async_trait::async_trait;

use crate::error::AnalysisError;
use crate::models::{AnalysisRequest, AnalysisResult};

/// Core trait both analysis backends implement.
///
/// The upload session holds one of these behind a pointer and never branches
/// on which implementation it is.
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    /// Short identifier for logging (`remote`, `simulated`).
    fn id(&self) -> &str;

    /// Submit an image and resolve to a complete result or a typed failure.
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult, AnalysisError>;
}
