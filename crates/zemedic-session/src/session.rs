//! The upload session state machine.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

use zemedic_analysis::{AnalysisClient, AnalysisRequest, AnalysisResult, ImageCategory};
use zemedic_assets::{AssetPolicy, AssetValidator, CandidateAsset};
use zemedic_preview::{Preview, PreviewGenerator};
use zemedic_review::ResultConsumer;

use crate::error::{SessionError, SessionResult};
use crate::models::{SessionState, SubmitOutcome};

/// Owns the lifecycle of one image from selection to reviewed result.
///
/// Holds exactly one candidate, preview, and result at a time; a new
/// selection discards the previous ones. The session serializes meaningful
/// transitions itself: at most one analysis is in flight, and an outcome
/// arriving for a superseded selection is discarded before it reaches the
/// consumer. There is no terminal state; the session is reusable for the
/// life of the hosting view.
pub struct UploadSession {
    inner: Arc<Mutex<SessionInner>>,
    validator: AssetValidator,
    previews: PreviewGenerator,
    client: Arc<dyn AnalysisClient>,
    consumer: Arc<dyn ResultConsumer>,
}

struct SessionInner {
    state: SessionState,
    candidate: Option<CandidateAsset>,
    preview: Option<Preview>,
    result: Option<Arc<AnalysisResult>>,
    last_error: Option<SessionError>,
    /// Bumped by every select/clear; in-flight work compares against it
    /// before applying an outcome.
    generation: u64,
    /// Identity of the in-flight submission, if any.
    in_flight: Option<Uuid>,
}

impl SessionInner {
    fn new() -> Self {
        Self {
            state: SessionState::Empty,
            candidate: None,
            preview: None,
            result: None,
            last_error: None,
            generation: 0,
            in_flight: None,
        }
    }

    /// Start a new selection cycle: everything previous is discarded and
    /// any in-flight submission is invalidated.
    fn begin_selection(&mut self) -> u64 {
        self.generation += 1;
        self.candidate = None;
        self.preview = None;
        self.result = None;
        self.last_error = None;
        self.in_flight = None;
        self.state = SessionState::Selecting;
        self.generation
    }
}

impl UploadSession {
    /// Create a session with the default intake policy.
    pub fn new(client: Arc<dyn AnalysisClient>, consumer: Arc<dyn ResultConsumer>) -> Self {
        Self::with_policy(AssetPolicy::default(), client, consumer)
    }

    /// Create a session with an explicit intake policy.
    pub fn with_policy(
        policy: AssetPolicy,
        client: Arc<dyn AnalysisClient>,
        consumer: Arc<dyn ResultConsumer>,
    ) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SessionInner::new())),
            validator: AssetValidator::new(policy),
            previews: PreviewGenerator::new(),
            client,
            consumer,
        }
    }

    /// Current lifecycle state.
    pub async fn state(&self) -> SessionState {
        self.inner.lock().await.state
    }

    /// The accepted candidate's file name, if one is held.
    pub async fn candidate_name(&self) -> Option<String> {
        self.inner
            .lock()
            .await
            .candidate
            .as_ref()
            .map(|c| c.file_name.clone())
    }

    /// The current preview, if one was generated.
    pub async fn preview(&self) -> Option<Preview> {
        self.inner.lock().await.preview.clone()
    }

    /// The completed result, while the session is reviewing one.
    pub async fn result(&self) -> Option<Arc<AnalysisResult>> {
        self.inner.lock().await.result.clone()
    }

    /// The error behind the current `Error` state, if any.
    pub async fn last_error(&self) -> Option<SessionError> {
        self.inner.lock().await.last_error.clone()
    }

    /// Accept a new candidate: validate, preview, and move to `Ready`.
    ///
    /// A prior result is discarded without re-notifying the consumer (it
    /// keeps its own copy). On a validation failure the rejected candidate
    /// is retained so the view can show what was rejected; on a decode
    /// failure the candidate is dropped since the bytes may be corrupt.
    pub async fn select(&self, candidate: CandidateAsset) -> SessionResult<()> {
        let generation = {
            let mut inner = self.inner.lock().await;
            let generation = inner.begin_selection();
            debug!(file = %candidate.file_name, generation, "candidate selected");

            if let Err(e) = self.validator.validate(&candidate) {
                warn!(file = %candidate.file_name, error = %e, "candidate rejected");
                let err = SessionError::from(e);
                inner.candidate = Some(candidate);
                inner.state = SessionState::Error;
                inner.last_error = Some(err.clone());
                return Err(err);
            }
            generation
        };

        // Decode runs without the lock; submission is never blocked longer
        // than decode time.
        match self.previews.generate(&candidate).await {
            Ok(preview) => {
                let mut inner = self.inner.lock().await;
                if inner.generation != generation {
                    debug!("selection superseded during preview generation");
                    return Ok(());
                }
                inner.candidate = Some(candidate);
                inner.preview = Some(preview);
                inner.state = SessionState::Ready;
                debug!(generation, "session ready");
                Ok(())
            }
            Err(e) => {
                warn!(file = %candidate.file_name, error = %e, "preview decode failed");
                let err = SessionError::from(e);
                let mut inner = self.inner.lock().await;
                if inner.generation == generation {
                    inner.candidate = None;
                    inner.state = SessionState::Error;
                    inner.last_error = Some(err.clone());
                }
                Err(err)
            }
        }
    }

    /// Discard the candidate, preview, and result; return to `Empty`.
    pub async fn clear(&self) {
        let mut inner = self.inner.lock().await;
        inner.begin_selection();
        inner.state = SessionState::Empty;
        debug!("session cleared");
    }

    /// Submit the accepted candidate for analysis under the given category.
    ///
    /// Ignored while another submission is in flight. On success the session
    /// moves to `Reviewing` and the consumer is notified exactly once; on
    /// failure the candidate and preview are retained so the user can retry
    /// without re-selecting.
    pub async fn submit(&self, category: ImageCategory) -> SessionResult<SubmitOutcome> {
        let (request, generation, request_id) = {
            let mut inner = self.inner.lock().await;
            match inner.state {
                SessionState::Submitting => {
                    debug!("submission already in flight; ignoring");
                    return Ok(SubmitOutcome::AlreadySubmitting);
                }
                SessionState::Ready => {}
                // Ready-equivalent: a failed submission keeps its inputs.
                SessionState::Error
                    if inner.candidate.is_some() && inner.preview.is_some() => {}
                SessionState::Empty | SessionState::Selecting => {
                    return Err(SessionError::NoCandidate);
                }
                _ => return Err(SessionError::NotReady),
            }

            let candidate = inner.candidate.as_ref().ok_or(SessionError::NoCandidate)?;
            let preview = inner.preview.as_ref().ok_or(SessionError::NoCandidate)?;
            let request = AnalysisRequest {
                bytes: candidate.bytes.clone(),
                file_name: candidate.file_name.clone(),
                category,
                preview_reference: preview.reference().to_string(),
            };

            let request_id = Uuid::new_v4();
            inner.state = SessionState::Submitting;
            inner.last_error = None;
            inner.in_flight = Some(request_id);
            (request, inner.generation, request_id)
        };

        debug!(
            client = self.client.id(),
            category = category.as_str(),
            %request_id,
            "submitting for analysis"
        );
        let outcome = self.client.analyze(request).await;

        let mut inner = self.inner.lock().await;
        if inner.generation != generation || inner.in_flight != Some(request_id) {
            debug!(%request_id, "discarding stale analysis outcome");
            return Ok(SubmitOutcome::Superseded);
        }
        inner.in_flight = None;

        match outcome {
            Ok(result) => {
                let result = Arc::new(result);
                inner.result = Some(Arc::clone(&result));
                inner.state = SessionState::Reviewing;
                debug!(result_id = %result.id, "analysis complete");
                drop(inner);
                // Exactly one delivery per completed submission.
                self.consumer.on_complete(Arc::clone(&result));
                Ok(SubmitOutcome::Completed(result))
            }
            Err(e) => {
                warn!(error = %e, "analysis failed");
                let err = SessionError::from(e);
                inner.state = SessionState::Error;
                inner.last_error = Some(err.clone());
                Err(err)
            }
        }
    }
}
