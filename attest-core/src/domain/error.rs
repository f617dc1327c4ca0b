use thiserror::Error;

use crate::domain::models::EntryId;

/// Errors that can abort a bulk approval action.
#[derive(Debug, Error)]
pub enum ApprovalError {
    #[error("invalid hour distribution on {} entries", .0.len())]
    InvalidDistribution(Vec<EntryId>),
    #[error("authentication failed")]
    AuthenticationFailed,
    #[error("remote call failed: {0}")]
    RemoteFailure(String),
    #[error("{0}")]
    Unknown(String),
}

impl ApprovalError {
    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::Unknown(msg.into())
    }
}
