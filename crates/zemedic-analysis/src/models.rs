//! Data models for analysis requests, findings, and results.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category of medical image, selected by the user before submission.
///
/// Travels with the request as metadata; never inferred from file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageCategory {
    /// Plain radiograph.
    Xray,
    /// Magnetic resonance imaging.
    Mri,
    /// Computed tomography.
    Ct,
}

impl ImageCategory {
    /// Wire representation (`xray`, `mri`, `ct`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageCategory::Xray => "xray",
            ImageCategory::Mri => "mri",
            ImageCategory::Ct => "ct",
        }
    }

    /// Parse the wire representation, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "xray" => Some(ImageCategory::Xray),
            "mri" => Some(ImageCategory::Mri),
            "ct" => Some(ImageCategory::Ct),
            _ => None,
        }
    }
}

/// Severity reported for a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    /// Parse severity text from the wire; unrecognized text maps to `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mild" => Some(Severity::Mild),
            "moderate" => Some(Severity::Moderate),
            "severe" => Some(Severity::Severe),
            _ => None,
        }
    }

    /// Display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
        }
    }
}

/// Relative position for a visual marker over the scanned image.
///
/// All values are fractions of the rendered image, in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayCoordinates {
    /// Horizontal center, 0 = left edge.
    pub x: f64,
    /// Vertical center, 0 = top edge.
    pub y: f64,
    /// Marker radius.
    pub radius: f64,
}

/// One detected abnormality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Finding name (e.g. "Pneumonia").
    pub name: String,
    /// Free-text anatomical location.
    pub location: String,
    /// Reported severity, when the service supplied one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    /// Confidence in `[0, 1]`. A finding with no reported score carries 0.
    pub confidence: f64,
    /// Textual recommendation for this finding.
    pub recommendation: String,
    /// Marker placement, when the service localized the finding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<OverlayCoordinates>,
}

/// Clamp an optional wire confidence into `[0, 1]`; absent scores become 0.
pub fn clamp_confidence(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0).clamp(0.0, 1.0)
}

/// Everything an analysis client needs for one submission.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Raw bytes of the selected file.
    pub bytes: Vec<u8>,
    /// Original file name, preserved in the multipart upload.
    pub file_name: String,
    /// User-selected image category.
    pub category: ImageCategory,
    /// Preview reference echoed into the result for the viewer.
    pub preview_reference: String,
}

/// Immutable aggregate returned for one submitted asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Unique result identifier.
    pub id: String,
    /// Category the image was submitted under.
    pub category: ImageCategory,
    /// Findings in detection-rank order (not severity order).
    pub findings: Vec<Finding>,
    /// Per-name confidence, reduced from `findings`. Keys are unique and
    /// match `findings[].name` exactly; the first occurrence of a name wins.
    pub confidence_by_name: BTreeMap<String, f64>,
    /// Free-text overall impression.
    pub overall_impression: String,
    /// Display reference for the analyzed image.
    pub preview_reference: String,
    /// When the result was produced.
    pub created_at: DateTime<Utc>,
}

impl AnalysisResult {
    /// Construct a result, deriving `confidence_by_name` from the findings.
    pub fn new(
        category: ImageCategory,
        findings: Vec<Finding>,
        overall_impression: String,
        preview_reference: String,
    ) -> Self {
        Self::with_identity(
            Uuid::new_v4().to_string(),
            Utc::now(),
            category,
            findings,
            overall_impression,
            preview_reference,
        )
    }

    /// Construct with an explicit id and timestamp (wire responses carry
    /// their own).
    pub fn with_identity(
        id: String,
        created_at: DateTime<Utc>,
        category: ImageCategory,
        findings: Vec<Finding>,
        overall_impression: String,
        preview_reference: String,
    ) -> Self {
        let confidence_by_name = reduce_confidences(&findings);
        Self {
            id,
            category,
            findings,
            confidence_by_name,
            overall_impression,
            preview_reference,
            created_at,
        }
    }
}

fn reduce_confidences(findings: &[Finding]) -> BTreeMap<String, f64> {
    let mut by_name = BTreeMap::new();
    for finding in findings {
        by_name
            .entry(finding.name.clone())
            .or_insert(finding.confidence);
    }
    by_name
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(name: &str, confidence: f64) -> Finding {
        Finding {
            name: name.to_string(),
            location: "Right Lower Lobe".to_string(),
            severity: Some(Severity::Moderate),
            confidence,
            recommendation: "Follow up".to_string(),
            overlay: None,
        }
    }

    #[test]
    fn test_category_wire_names() {
        assert_eq!(ImageCategory::Xray.as_str(), "xray");
        assert_eq!(ImageCategory::parse("CT"), Some(ImageCategory::Ct));
        assert_eq!(ImageCategory::parse("ultrasound"), None);
        assert_eq!(
            serde_json::to_string(&ImageCategory::Mri).unwrap(),
            "\"mri\""
        );
    }

    #[test]
    fn test_severity_parse_is_case_insensitive() {
        assert_eq!(Severity::parse("moderate"), Some(Severity::Moderate));
        assert_eq!(Severity::parse(" MILD "), Some(Severity::Mild));
        assert_eq!(Severity::parse("N/A"), None);
    }

    #[test]
    fn test_clamp_confidence() {
        assert_eq!(clamp_confidence(None), 0.0);
        assert_eq!(clamp_confidence(Some(1.7)), 1.0);
        assert_eq!(clamp_confidence(Some(-0.2)), 0.0);
        assert_eq!(clamp_confidence(Some(0.94)), 0.94);
    }

    #[test]
    fn test_confidence_by_name_matches_findings() {
        let result = AnalysisResult::new(
            ImageCategory::Xray,
            vec![finding("Pneumonia", 0.94), finding("Pleural Effusion", 0.78)],
            "impression".to_string(),
            "preview".to_string(),
        );

        assert_eq!(result.confidence_by_name.len(), 2);
        assert_eq!(result.confidence_by_name["Pneumonia"], 0.94);
        assert_eq!(result.confidence_by_name["Pleural Effusion"], 0.78);
        for f in &result.findings {
            assert!(result.confidence_by_name.contains_key(&f.name));
        }
    }

    #[test]
    fn test_duplicate_finding_names_keep_first_score() {
        let result = AnalysisResult::new(
            ImageCategory::Mri,
            vec![finding("Lesion", 0.9), finding("Lesion", 0.4)],
            String::new(),
            String::new(),
        );
        assert_eq!(result.confidence_by_name.len(), 1);
        assert_eq!(result.confidence_by_name["Lesion"], 0.9);
    }

    #[test]
    fn test_findings_preserve_detection_order() {
        let result = AnalysisResult::new(
            ImageCategory::Xray,
            vec![finding("B-second", 0.5), finding("A-first", 0.9)],
            String::new(),
            String::new(),
        );
        // Detection rank, not severity or alphabetical order.
        assert_eq!(result.findings[0].name, "B-second");
        assert_eq!(result.findings[1].name, "A-first");
    }
}
