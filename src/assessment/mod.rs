pub mod form;
pub mod lifecycle;
pub mod response;
pub mod service;
pub mod view;

use thiserror::Error;

pub use form::{FormFields, ValidationError};
pub use lifecycle::{AssessmentLifecycle, LifecycleState, SubmitOutcome};
pub use service::{HttpScoringService, ScoringService, ServiceReply, TransportError};
pub use view::assemble_view;

pub const TRANSPORT_FAILURE_MESSAGE: &str = "Unable to analyze right now. Please try again.";

/// Why a submission ended in `Failed`. Every kind ends only the current submission.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssessmentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("service returned {status}: {reason}")]
    Service { status: u16, reason: String },
}

impl AssessmentError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(err) => err.user_message(),
            Self::Transport(_) => TRANSPORT_FAILURE_MESSAGE.to_string(),
            Self::Service { reason, .. } => reason.clone(),
        }
    }
}

impl From<TransportError> for AssessmentError {
    fn from(value: TransportError) -> Self {
        Self::Transport(value.to_string())
    }
}
