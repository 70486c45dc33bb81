//! Preview generation for the upload workflow.
//!
//! Produces a lightweight, display-only rendering reference for a validated
//! candidate: decoded images become inline PNG data URIs with their pixel
//! dimensions, DICOM files get a fixed placeholder. Nothing here feeds the
//! analysis path.

pub mod error;
pub mod generator;
pub mod models;

pub use error::{PreviewError, PreviewResult};
pub use generator::PreviewGenerator;
pub use models::{Preview, DICOM_PLACEHOLDER};
