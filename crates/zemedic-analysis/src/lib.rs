//! Analysis client abstraction for the upload workflow.
//!
//! One [`AnalysisClient`] trait, two interchangeable backends:
//! - [`RemoteAnalysisClient`] submits the image to the analysis service over
//!   multipart HTTP with an injected bearer credential.
//! - [`SimulatedAnalysisClient`] fabricates a deterministic result after a
//!   fixed delay, for demos and when no trusted endpoint is configured.
//!
//! The upload session holds either behind the trait and never branches on
//! which one it is.

pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod models;
pub mod remote;
pub mod simulated;

pub use client::AnalysisClient;
pub use config::{RemoteConfig, SimulationConfig};
pub use credentials::{CredentialProvider, NoCredential, StaticCredential};
pub use error::AnalysisError;
pub use models::{
    clamp_confidence, AnalysisRequest, AnalysisResult, Finding, ImageCategory,
    OverlayCoordinates, Severity,
};
pub use remote::RemoteAnalysisClient;
pub use simulated::SimulatedAnalysisClient;
