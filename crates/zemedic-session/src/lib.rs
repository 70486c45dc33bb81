//! Upload session state machine.
//!
//! One [`UploadSession`] per hosting view coordinates the whole workflow:
//! candidate intake and validation, preview generation, submission through an
//! [`AnalysisClient`](zemedic_analysis::AnalysisClient), and exactly-once
//! delivery of the finished result to a
//! [`ResultConsumer`](zemedic_review::ResultConsumer).

pub mod error;
pub mod models;
pub mod session;

pub use error::{SessionError, SessionResult};
pub use models::{SessionState, SubmitOutcome};
pub use session::UploadSession;
