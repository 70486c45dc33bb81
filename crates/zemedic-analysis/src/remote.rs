//! Remote analysis client backed by the analysis service.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::multipart;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error};
use uuid::Uuid;

use crate::client::AnalysisClient;
use crate::config::RemoteConfig;
use crate::credentials::CredentialProvider;
use crate::error::AnalysisError;
use crate::models::{
    clamp_confidence, AnalysisRequest, AnalysisResult, Finding, ImageCategory,
    OverlayCoordinates, Severity,
};

/// Client for the networked analysis service.
///
/// Sends `POST {base}/upload-image` as multipart (`file`, `imageType`) with a
/// bearer credential from the injected provider, and maps the JSON response
/// into an [`AnalysisResult`].
pub struct RemoteAnalysisClient {
    client: Arc<Client>,
    base_url: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl RemoteAnalysisClient {
    /// Create a remote client for the configured service.
    pub fn new(
        config: RemoteConfig,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self, AnalysisError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AnalysisError::TransportFailure(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client: Arc::new(client),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }
}

#[async_trait]
impl AnalysisClient for RemoteAnalysisClient {
    fn id(&self) -> &str {
        "remote"
    }

    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        // Precondition: never send an unauthenticated request.
        let token = self
            .credentials
            .bearer_token()
            .ok_or(AnalysisError::MissingCredential)?;

        debug!(
            category = request.category.as_str(),
            file = %request.file_name,
            size_bytes = request.bytes.len(),
            "submitting image for remote analysis"
        );

        let file_part = multipart::Part::bytes(request.bytes)
            .file_name(request.file_name.clone());
        let form = multipart::Form::new()
            .part("file", file_part)
            .text("imageType", request.category.as_str());

        let response = self
            .client
            .post(format!("{}/upload-image", self.base_url))
            .header("Authorization", format!("Bearer {token}"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!("analysis service request failed: {}", e);
                AnalysisError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("analysis service error ({}): {}", status, body);

            if status.as_u16() == 401 {
                return Err(AnalysisError::MissingCredential);
            }
            return Err(AnalysisError::ServerRejected {
                detail: extract_detail(&body)
                    .unwrap_or_else(|| AnalysisError::GENERIC_REJECTION.to_string()),
            });
        }

        let wire: WireAnalysisResponse = response.json().await?;
        Ok(wire.into_result(request.category, request.preview_reference))
    }
}

fn extract_detail(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        detail: String,
    }
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|e| e.detail)
        .filter(|d| !d.trim().is_empty())
}

/// Success body of `POST /upload-image`.
#[derive(Debug, Deserialize)]
struct WireAnalysisResponse {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    image_type: Option<String>,
    #[serde(default)]
    findings: Vec<WireFinding>,
    /// Service-level score map; used only to backfill findings that omit a
    /// per-finding confidence. Extra keys with no matching finding are
    /// dropped so `confidence_by_name` stays aligned with `findings`.
    #[serde(default)]
    confidence_scores: HashMap<String, f64>,
    #[serde(default)]
    timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireFinding {
    name: String,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    severity: Option<String>,
    #[serde(default)]
    confidence: Option<f64>,
    #[serde(default)]
    recommendation: Option<String>,
    #[serde(default)]
    overlay: Option<OverlayCoordinates>,
}

impl WireAnalysisResponse {
    fn into_result(
        self,
        requested_category: ImageCategory,
        preview_reference: String,
    ) -> AnalysisResult {
        let category = self
            .image_type
            .as_deref()
            .and_then(ImageCategory::parse)
            .unwrap_or(requested_category);

        let findings = self
            .findings
            .into_iter()
            .map(|wire| {
                let confidence = clamp_confidence(
                    wire.confidence
                        .or_else(|| self.confidence_scores.get(&wire.name).copied()),
                );
                Finding {
                    confidence,
                    location: wire.location.unwrap_or_default(),
                    severity: wire.severity.as_deref().and_then(Severity::parse),
                    recommendation: wire.recommendation.unwrap_or_default(),
                    overlay: wire.overlay,
                    name: wire.name,
                }
            })
            .collect();

        AnalysisResult::with_identity(
            self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            self.timestamp.unwrap_or_else(Utc::now),
            category,
            findings,
            String::new(),
            self.image_url.unwrap_or(preview_reference),
        )
    }
}
