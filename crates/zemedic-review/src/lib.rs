//! Result consumption and presentation adapters.
//!
//! Defines the [`ResultConsumer`] contract the upload session delivers into,
//! plus the pure presentation helpers the dashboard view uses: confidence
//! tiering, overlay marker placement with a deterministic fallback, and
//! plain-text report rendering.

pub mod consumer;
pub mod overlay;
pub mod report;
pub mod tiers;

pub use consumer::{RecordingConsumer, ResultConsumer};
pub use overlay::{marker_color, overlay_position};
pub use report::{render_report, ReportConsumer};
pub use tiers::{percent, ConfidenceTier};
