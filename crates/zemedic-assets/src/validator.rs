//! Candidate asset validation against the intake policy.

use tracing::debug;

use crate::config::AssetPolicy;
use crate::error::{AssetError, AssetResult};
use crate::models::{CandidateAsset, DeclaredType};

/// Validates candidate assets before they are accepted into a session.
///
/// Pure with respect to the candidate: no side effects, deterministic for a
/// given policy. Checks run in order and the first failure wins.
pub struct AssetValidator {
    policy: AssetPolicy,
}

impl AssetValidator {
    /// Create a validator with the given policy.
    pub fn new(policy: AssetPolicy) -> Self {
        Self { policy }
    }

    /// Create a validator with the default 10 MiB policy.
    pub fn with_default_policy() -> Self {
        Self::new(AssetPolicy::default())
    }

    /// The policy this validator enforces.
    pub fn policy(&self) -> &AssetPolicy {
        &self.policy
    }

    /// Validate a candidate: type check first, then size check.
    pub fn validate(&self, candidate: &CandidateAsset) -> AssetResult<()> {
        match &candidate.declared_type {
            DeclaredType::Image(_) | DeclaredType::Dicom => {}
            DeclaredType::Unknown => {
                debug!(file = %candidate.file_name, "rejected candidate: unsupported type");
                return Err(AssetError::UnsupportedType(candidate.file_name.clone()));
            }
        }

        if candidate.size_bytes > self.policy.max_size_bytes {
            debug!(
                file = %candidate.file_name,
                size_bytes = candidate.size_bytes,
                "rejected candidate: over size ceiling"
            );
            return Err(AssetError::TooLarge {
                size_mb: candidate.size_mb(),
                limit_mb: self.policy.max_size_mb(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_candidate(size: usize) -> CandidateAsset {
        CandidateAsset::from_picker("chest.jpg", Some("image/jpeg"), vec![0u8; size])
    }

    #[test]
    fn test_accepts_small_image() {
        let validator = AssetValidator::with_default_policy();
        assert!(validator.validate(&image_candidate(1024)).is_ok());
    }

    #[test]
    fn test_accepts_dicom() {
        let validator = AssetValidator::with_default_policy();
        let candidate = CandidateAsset::from_drop("study.dcm", None, vec![0u8; 1024]);
        assert!(validator.validate(&candidate).is_ok());
    }

    #[test]
    fn test_rejects_unsupported_type() {
        let validator = AssetValidator::with_default_policy();
        let candidate = CandidateAsset::from_picker("report.pdf", Some("application/pdf"), vec![0u8; 16]);
        assert_eq!(
            validator.validate(&candidate),
            Err(AssetError::UnsupportedType("report.pdf".to_string()))
        );
    }

    #[test]
    fn test_rejects_oversized_image() {
        let validator = AssetValidator::with_default_policy();
        let candidate = image_candidate(11 * 1024 * 1024);
        match validator.validate(&candidate) {
            Err(AssetError::TooLarge { size_mb, limit_mb }) => {
                assert!(size_mb > 10.0);
                assert_eq!(limit_mb, 10);
            }
            other => panic!("expected TooLarge, got {:?}", other),
        }
    }

    #[test]
    fn test_boundary_size_is_accepted() {
        let validator = AssetValidator::with_default_policy();
        assert!(validator.validate(&image_candidate(10 * 1024 * 1024)).is_ok());
    }

    #[test]
    fn test_type_check_wins_over_size_check() {
        // An oversized unsupported file reports the type failure, not the size.
        let validator = AssetValidator::with_default_policy();
        let candidate =
            CandidateAsset::from_drop("huge.pdf", Some("application/pdf"), vec![0u8; 11 * 1024 * 1024]);
        assert!(matches!(
            validator.validate(&candidate),
            Err(AssetError::UnsupportedType(_))
        ));
    }

    #[test]
    fn test_custom_policy_ceiling() {
        let validator = AssetValidator::new(AssetPolicy {
            max_size_bytes: 1024,
        });
        assert!(validator.validate(&image_candidate(1024)).is_ok());
        assert!(validator.validate(&image_candidate(1025)).is_err());
    }
}
