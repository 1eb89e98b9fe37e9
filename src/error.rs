//! Error taxonomy for the decision core.
//!
//! Every stage that can fail returns a [`CoreError`]; stages that merely
//! *degrade* (external service unavailable, data gap) do not produce an
//! error at all — they return a normal result plus a [`crate::model::DegradationNote`].

use thiserror::Error;

/// The decision core's error taxonomy.
///
/// `NoFeasibleOptions` and `DegradedResult` are deliberately absent here:
/// the former is an empty, successful result (see
/// [`crate::pipeline::PipelineOutcome`]); the latter is metadata attached to
/// a successful result, never a failure.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("session {0} not found")]
    SessionNotFound(uuid::Uuid),

    #[error("session {0} expired")]
    SessionExpired(uuid::Uuid),

    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    #[error("internal error: {0}")]
    CoreBug(String),
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::InvalidInput(_) => ErrorKind::InvalidInput,
            CoreError::SessionNotFound(_) => ErrorKind::SessionNotFound,
            CoreError::SessionExpired(_) => ErrorKind::SessionExpired,
            CoreError::InvalidSelection(_) => ErrorKind::InvalidSelection,
            CoreError::CoreBug(_) => ErrorKind::CoreBug,
        }
    }

    /// Status code a future HTTP façade would use. The core never speaks
    /// HTTP itself; this just keeps the mapping in one place.
    pub fn http_status(&self) -> u16 {
        match self.kind() {
            ErrorKind::InvalidInput | ErrorKind::InvalidSelection => 400,
            ErrorKind::SessionNotFound => 404,
            ErrorKind::SessionExpired => 410,
            ErrorKind::CoreBug => 500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    SessionNotFound,
    SessionExpired,
    InvalidSelection,
    CoreBug,
}

pub type CoreResult<T> = Result<T, CoreError>;

/// Why a pipeline stage fell back to a documented default instead of using
/// live external data. Never fatal — attached to the response for
/// observability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum DegradationReason {
    Timeout,
    ParseError,
    PartialMajority,
    Disabled,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct DegradationNote {
    pub stage: &'static str,
    pub reason: DegradationReason,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_mapping() {
        assert_eq!(
            CoreError::InvalidInput("bad city".into()).http_status(),
            400
        );
        assert_eq!(
            CoreError::SessionNotFound(uuid::Uuid::nil()).http_status(),
            404
        );
        assert_eq!(CoreError::CoreBug("oops".into()).http_status(), 500);
    }

    #[test]
    fn kind_roundtrip() {
        let e = CoreError::InvalidSelection("poi already visited".into());
        assert_eq!(e.kind(), ErrorKind::InvalidSelection);
    }
}
