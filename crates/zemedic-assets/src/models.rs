//! Candidate asset model and intake normalization.

use serde::{Deserialize, Serialize};

/// File extensions recognized as clinical (non-displayable) formats.
const CLINICAL_EXTENSIONS: &[&str] = &["dcm", "dicom"];

/// MIME types recognized as clinical formats.
const CLINICAL_MIME_TYPES: &[&str] = &["application/dicom"];

/// The type a candidate declares through its MIME type or file extension.
///
/// This is declared intent only; nothing here inspects the file contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclaredType {
    /// A displayable image with the given MIME type (e.g. `image/jpeg`).
    Image(String),
    /// A DICOM clinical image, previewed with a placeholder.
    Dicom,
    /// Anything else; rejected by the validator.
    Unknown,
}

impl DeclaredType {
    /// Infer the declared type from an optional MIME hint and the file name.
    ///
    /// The MIME hint (supplied by pickers and drop events alike) wins when it
    /// is recognizable; otherwise the extension decides via `mime_guess`.
    pub fn infer(file_name: &str, mime_hint: Option<&str>) -> Self {
        if let Some(mime) = mime_hint {
            let mime = mime.trim().to_ascii_lowercase();
            if mime.starts_with("image/") {
                return DeclaredType::Image(mime);
            }
            if CLINICAL_MIME_TYPES.contains(&mime.as_str()) {
                return DeclaredType::Dicom;
            }
        }

        if let Some(ext) = extension_of(file_name) {
            if CLINICAL_EXTENSIONS.contains(&ext.as_str()) {
                return DeclaredType::Dicom;
            }
        }

        if let Some(guess) = mime_guess::from_path(file_name).first() {
            if guess.type_() == mime_guess::mime::IMAGE {
                return DeclaredType::Image(guess.essence_str().to_string());
            }
        }

        DeclaredType::Unknown
    }

    /// Whether the candidate can be decoded for an inline preview.
    pub fn is_displayable(&self) -> bool {
        matches!(self, DeclaredType::Image(_))
    }
}

/// A user-selected file that has not yet been accepted into the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateAsset {
    /// Raw file contents. Owned by the upload session until replaced.
    pub bytes: Vec<u8>,
    /// Original file name as reported by the intake source.
    pub file_name: String,
    /// Declared type inferred from MIME hint or extension.
    pub declared_type: DeclaredType,
    /// File size in bytes.
    pub size_bytes: u64,
}

impl CandidateAsset {
    fn new(file_name: String, mime_hint: Option<&str>, bytes: Vec<u8>) -> Self {
        let declared_type = DeclaredType::infer(&file_name, mime_hint);
        let size_bytes = bytes.len() as u64;
        Self {
            bytes,
            file_name,
            declared_type,
            size_bytes,
        }
    }

    /// Normalize a file-picker selection into a candidate.
    pub fn from_picker(
        file_name: impl Into<String>,
        mime_hint: Option<&str>,
        bytes: Vec<u8>,
    ) -> Self {
        Self::new(file_name.into(), mime_hint, bytes)
    }

    /// Normalize a drag-and-drop drop event into a candidate.
    ///
    /// Shares the exact construction path with [`CandidateAsset::from_picker`],
    /// so both intake sources are validated identically.
    pub fn from_drop(
        file_name: impl Into<String>,
        mime_hint: Option<&str>,
        bytes: Vec<u8>,
    ) -> Self {
        Self::new(file_name.into(), mime_hint, bytes)
    }

    /// File size in megabytes, for user-facing messages.
    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / (1024.0 * 1024.0)
    }
}

fn extension_of(file_name: &str) -> Option<String> {
    std::path::Path::new(file_name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_image_from_mime_hint() {
        let declared = DeclaredType::infer("scan.bin", Some("image/jpeg"));
        assert_eq!(declared, DeclaredType::Image("image/jpeg".to_string()));
    }

    #[test]
    fn test_infer_image_from_extension_without_hint() {
        let declared = DeclaredType::infer("chest.PNG", None);
        assert_eq!(declared, DeclaredType::Image("image/png".to_string()));
    }

    #[test]
    fn test_infer_dicom_from_extension() {
        assert_eq!(DeclaredType::infer("study.dcm", None), DeclaredType::Dicom);
        assert_eq!(
            DeclaredType::infer("study.DICOM", Some("application/octet-stream")),
            DeclaredType::Dicom
        );
    }

    #[test]
    fn test_infer_dicom_from_mime() {
        assert_eq!(
            DeclaredType::infer("study", Some("application/dicom")),
            DeclaredType::Dicom
        );
    }

    #[test]
    fn test_infer_unknown_for_other_files() {
        assert_eq!(
            DeclaredType::infer("report.pdf", Some("application/pdf")),
            DeclaredType::Unknown
        );
        assert_eq!(DeclaredType::infer("notes.txt", None), DeclaredType::Unknown);
    }

    #[test]
    fn test_picker_and_drop_normalize_identically() {
        let bytes = vec![0xffu8, 0xd8, 0xff, 0xe0];
        let picked = CandidateAsset::from_picker("a.jpg", Some("image/jpeg"), bytes.clone());
        let dropped = CandidateAsset::from_drop("a.jpg", Some("image/jpeg"), bytes);
        assert_eq!(picked, dropped);
        assert_eq!(picked.size_bytes, 4);
    }

    #[test]
    fn test_size_mb() {
        let candidate = CandidateAsset::from_drop("a.png", None, vec![0u8; 2 * 1024 * 1024]);
        assert!((candidate.size_mb() - 2.0).abs() < f64::EPSILON);
    }
}
