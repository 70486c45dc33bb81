//! Simulated analysis client for demos and offline use.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::client::AnalysisClient;
use crate::config::SimulationConfig;
use crate::error::AnalysisError;
use crate::models::{
    AnalysisRequest, AnalysisResult, Finding, ImageCategory, OverlayCoordinates, Severity,
};

/// Fabricates a plausible result after a fixed delay.
///
/// Deterministic for a given category: the same two finding templates and
/// confidence values every call, so demo flows are stable.
pub struct SimulatedAnalysisClient {
    config: SimulationConfig,
}

impl SimulatedAnalysisClient {
    /// Create a simulated client with the given delay configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Simulated client with the default two-second delay.
    pub fn with_default_config() -> Self {
        Self::new(SimulationConfig::default())
    }
}

#[async_trait]
impl AnalysisClient for SimulatedAnalysisClient {
    fn id(&self) -> &str {
        "simulated"
    }

    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        debug!(
            category = request.category.as_str(),
            delay_ms = self.config.delay_ms,
            "simulating analysis"
        );
        tokio::time::sleep(Duration::from_millis(self.config.delay_ms)).await;

        Ok(AnalysisResult::new(
            request.category,
            fabricated_findings(request.category),
            impression_for(request.category).to_string(),
            request.preview_reference,
        ))
    }
}

fn fabricated_findings(category: ImageCategory) -> Vec<Finding> {
    match category {
        ImageCategory::Xray => vec![
            template(
                "Pneumonia",
                "Right Lower Lobe",
                Severity::Moderate,
                0.94,
                "Recommend follow-up with a pulmonologist and consider antibiotic \
                 treatment pending clinical correlation.",
                OverlayCoordinates {
                    x: 0.62,
                    y: 0.58,
                    radius: 0.08,
                },
            ),
            template(
                "Pleural Effusion",
                "Right Side",
                Severity::Mild,
                0.78,
                "Monitor for fluid accumulation; consider ultrasound if symptoms progress.",
                OverlayCoordinates {
                    x: 0.70,
                    y: 0.74,
                    radius: 0.06,
                },
            ),
        ],
        ImageCategory::Mri => vec![
            template(
                "Disc Herniation",
                "L4-L5",
                Severity::Moderate,
                0.89,
                "Recommend orthopedic consultation and repeat imaging in six weeks.",
                OverlayCoordinates {
                    x: 0.48,
                    y: 0.66,
                    radius: 0.07,
                },
            ),
            template(
                "Spinal Stenosis",
                "L3-L4",
                Severity::Mild,
                0.76,
                "Conservative management with physiotherapy is suggested.",
                OverlayCoordinates {
                    x: 0.50,
                    y: 0.52,
                    radius: 0.05,
                },
            ),
        ],
        ImageCategory::Ct => vec![
            template(
                "Glioblastoma",
                "Frontal Lobe",
                Severity::Moderate,
                0.94,
                "Urgent neurosurgical referral for biopsy and staging.",
                OverlayCoordinates {
                    x: 0.42,
                    y: 0.30,
                    radius: 0.09,
                },
            ),
            template(
                "Midline Shift",
                "From Left to Right",
                Severity::Mild,
                0.78,
                "Repeat imaging within 24 hours to monitor progression.",
                OverlayCoordinates {
                    x: 0.52,
                    y: 0.44,
                    radius: 0.05,
                },
            ),
        ],
    }
}

fn impression_for(category: ImageCategory) -> &'static str {
    match category {
        ImageCategory::Xray => {
            "Based on the analysis, there are indications of mild pneumonia in the lower \
             right lung. The opacity patterns suggest bacterial infection rather than viral. \
             Recommend follow-up with a pulmonologist and consider antibiotic treatment \
             pending clinical correlation."
        }
        ImageCategory::Mri => {
            "Lumbar series shows a moderate posterior disc herniation at L4-L5 with mild \
             canal narrowing at L3-L4. Correlate with neurological examination."
        }
        ImageCategory::Ct => {
            "Contrast study shows a frontal mass with surrounding edema and a mild \
             left-to-right midline shift. Neurosurgical review is advised."
        }
    }
}

fn template(
    name: &str,
    location: &str,
    severity: Severity,
    confidence: f64,
    recommendation: &str,
    overlay: OverlayCoordinates,
) -> Finding {
    Finding {
        name: name.to_string(),
        location: location.to_string(),
        severity: Some(severity),
        confidence,
        recommendation: recommendation.to_string(),
        overlay: Some(overlay),
    }
}
