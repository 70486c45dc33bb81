//! Asynchronous preview generation.

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::debug;
use zemedic_assets::{CandidateAsset, DeclaredType};

use crate::error::{PreviewError, PreviewResult};
use crate::models::Preview;

/// Generates display-only previews for validated candidates.
///
/// Decoding runs on a blocking worker so callers never stall on large images.
#[derive(Debug, Default, Clone)]
pub struct PreviewGenerator;

impl PreviewGenerator {
    /// Create a preview generator.
    pub fn new() -> Self {
        Self
    }

    /// Produce a preview for the candidate.
    ///
    /// Displayable images are decoded and re-encoded as a PNG data URI;
    /// DICOM candidates get the fixed placeholder. A decode failure is an
    /// error, never a silent placeholder.
    pub async fn generate(&self, candidate: &CandidateAsset) -> PreviewResult<Preview> {
        match &candidate.declared_type {
            DeclaredType::Dicom => {
                debug!(file = %candidate.file_name, "using placeholder preview for DICOM");
                Ok(Preview::Placeholder)
            }
            DeclaredType::Image(_) => {
                let bytes = candidate.bytes.clone();
                tokio::task::spawn_blocking(move || decode_bitmap(&bytes))
                    .await
                    .map_err(|e| {
                        PreviewError::DecodeFailure(format!("preview task failed: {e}"))
                    })?
            }
            DeclaredType::Unknown => Err(PreviewError::DecodeFailure(format!(
                "{} is not a displayable format",
                candidate.file_name
            ))),
        }
    }
}

fn decode_bitmap(bytes: &[u8]) -> PreviewResult<Preview> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| PreviewError::DecodeFailure(e.to_string()))?;
    let (width, height) = (decoded.width(), decoded.height());

    let mut png = Vec::new();
    decoded
        .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .map_err(|e| PreviewError::DecodeFailure(e.to_string()))?;

    Ok(Preview::Bitmap {
        data_uri: format!("data:image/png;base64,{}", STANDARD.encode(png)),
        width,
        height,
    })
}
