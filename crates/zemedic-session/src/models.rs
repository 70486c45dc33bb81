//! Session state and submit outcome models.

use std::sync::Arc;

use zemedic_analysis::AnalysisResult;

/// Lifecycle state of an upload session.
///
/// `Error` retains enough context for recovery: after a failed submission the
/// candidate and preview are kept so the user can retry without re-selecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No candidate selected.
    Empty,
    /// A candidate is being validated and previewed.
    Selecting,
    /// Candidate accepted and previewed; ready to submit.
    Ready,
    /// An analysis request is in flight.
    Submitting,
    /// A completed result is held for review.
    Reviewing,
    /// The last operation failed; see the session's `last_error`.
    Error,
}

/// What a `submit` call produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Analysis completed; the consumer was notified with this result.
    Completed(Arc<AnalysisResult>),
    /// Another submission was already in flight; this call did nothing.
    AlreadySubmitting,
    /// A new selection (or `clear`) superseded this submission while it was
    /// in flight; its result was discarded and the consumer not notified.
    Superseded,
}
