//! Plain-text report rendering for a completed analysis.

use std::fmt::Write as _;
use std::sync::{Arc, Mutex};

use tracing::info;
use zemedic_analysis::AnalysisResult;

use crate::consumer::ResultConsumer;
use crate::tiers::{percent, ConfidenceTier};

/// Render the findings table and assessment as a downloadable text report.
pub fn render_report(result: &AnalysisResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Analysis Report");
    let _ = writeln!(out, "===============");
    let _ = writeln!(out, "Result ID:  {}", result.id);
    let _ = writeln!(out, "Image Type: {}", result.category.as_str().to_uppercase());
    let _ = writeln!(out, "Created:    {}", result.created_at.to_rfc3339());
    let _ = writeln!(out);
    let _ = writeln!(out, "Findings");
    let _ = writeln!(out, "--------");

    if result.findings.is_empty() {
        let _ = writeln!(out, "No significant findings.");
    }
    for finding in &result.findings {
        let tier = ConfidenceTier::for_score(finding.confidence);
        let _ = writeln!(
            out,
            "- {} ({}%, {:?})",
            finding.name,
            percent(finding.confidence),
            tier
        );
        let _ = writeln!(out, "  Location: {}", finding.location);
        let _ = writeln!(
            out,
            "  Severity: {}",
            finding
                .severity
                .map(|s| s.as_str())
                .unwrap_or("Not specified")
        );
        if !finding.recommendation.is_empty() {
            let _ = writeln!(out, "  Recommendation: {}", finding.recommendation);
        }
    }

    if !result.overall_impression.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "AI Assessment");
        let _ = writeln!(out, "-------------");
        let _ = writeln!(out, "{}", result.overall_impression);
    }

    out
}

/// Consumer that renders a report for every delivered result.
#[derive(Default)]
pub struct ReportConsumer {
    reports: Mutex<Vec<String>>,
}

impl ReportConsumer {
    /// Create an empty report consumer.
    pub fn new() -> Self {
        Self::default()
    }

    /// All reports rendered so far, in delivery order.
    pub fn reports(&self) -> Vec<String> {
        self.reports.lock().unwrap().clone()
    }
}

impl ResultConsumer for ReportConsumer {
    fn on_complete(&self, result: Arc<AnalysisResult>) {
        info!(result_id = %result.id, "rendering analysis report");
        self.reports.lock().unwrap().push(render_report(&result));
    }
}
