//! Scoring error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Structural failures of the scoring engine.
///
/// The wizard never reaches scoring without at least one option, so these
/// indicate a caller bypassing the state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("Cannot score an empty option list")]
    NoOptions,
}

impl ScoringError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ScoringError::NoOptions => ErrorCode::NoOptionsToScore,
        }
    }
}

impl From<ScoringError> for DomainError {
    fn from(err: ScoringError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_options_maps_to_error_code() {
        assert_eq!(ScoringError::NoOptions.code(), ErrorCode::NoOptionsToScore);
        let err: DomainError = ScoringError::NoOptions.into();
        assert_eq!(format!("{}", err), "[NO_OPTIONS_TO_SCORE] Cannot score an empty option list");
    }
}
