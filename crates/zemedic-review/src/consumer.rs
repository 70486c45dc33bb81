//! The result consumer contract.

use std::sync::{Arc, Mutex};

use zemedic_analysis::AnalysisResult;

/// Receiver of completed analysis results.
///
/// The upload session invokes `on_complete` at most once per submission
/// cycle, never with a partial result, and never re-invokes it for the same
/// result. Consumers may retain the shared handle for as long as they like.
pub trait ResultConsumer: Send + Sync {
    /// Called once when an analysis completes successfully.
    fn on_complete(&self, result: Arc<AnalysisResult>);
}

/// Consumer that records every delivery; the standard test double.
#[derive(Default)]
pub struct RecordingConsumer {
    received: Mutex<Vec<Arc<AnalysisResult>>>,
}

impl RecordingConsumer {
    /// Create an empty recording consumer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of deliveries so far.
    pub fn call_count(&self) -> usize {
        self.received.lock().unwrap().len()
    }

    /// The most recent delivery, if any.
    pub fn last(&self) -> Option<Arc<AnalysisResult>> {
        self.received.lock().unwrap().last().cloned()
    }
}

impl ResultConsumer for RecordingConsumer {
    fn on_complete(&self, result: Arc<AnalysisResult>) {
        self.received.lock().unwrap().push(result);
    }
}
