//! Preview handle model.

/// Fixed placeholder reference used for non-displayable clinical formats.
pub const DICOM_PLACEHOLDER: &str = "/images/scans/dicom-placeholder.jpg";

/// A renderable preview of a candidate asset. Display-only; never analyzed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// An inline bitmap, re-encoded as a PNG data URI.
    Bitmap {
        /// `data:image/png;base64,...` reference usable by a viewer.
        data_uri: String,
        /// Decoded pixel width.
        width: u32,
        /// Decoded pixel height.
        height: u32,
    },
    /// Fixed placeholder for formats the viewer cannot decode inline.
    Placeholder,
}

impl Preview {
    /// The reference a viewer (or the analysis result) should display.
    pub fn reference(&self) -> &str {
        match self {
            Preview::Bitmap { data_uri, .. } => data_uri,
            Preview::Placeholder => DICOM_PLACEHOLDER,
        }
    }

    /// Pixel dimensions, when the preview was actually decoded.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match self {
            Preview::Bitmap { width, height, .. } => Some((*width, *height)),
            Preview::Placeholder => None,
        }
    }
}
