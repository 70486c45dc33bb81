//! Candidate asset intake and validation for the upload workflow.
//!
//! This crate normalizes file-picker selections and drag-and-drop events into
//! one [`CandidateAsset`] shape and validates candidates against the intake
//! policy (supported type, size ceiling) before the upload session accepts
//! them.

pub mod config;
pub mod error;
pub mod models;
pub mod validator;

pub use config::AssetPolicy;
pub use error::{AssetError, AssetResult};
pub use models::{CandidateAsset, DeclaredType};
pub use validator::AssetValidator;
