//! Wizard error types.
//!
//! Most refused actions are not errors: they come back as
//! `Outcome::Rejected` and leave the session unchanged. `WizardError` is
//! for calls whose return value cannot be produced at all, such as asking
//! for results outside the scoring step.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::scoring::ScoringError;

use super::Rejection;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Action refused: {0}")]
    Rejected(Rejection),

    #[error("Scoring failed: {0}")]
    Scoring(#[from] ScoringError),
}

impl WizardError {
    pub fn code(&self) -> ErrorCode {
        match self {
            WizardError::Rejected(Rejection::NotAvailable { .. }) => ErrorCode::ActionNotAvailable,
            WizardError::Rejected(Rejection::InvalidTransition { .. }) => {
                ErrorCode::InvalidStateTransition
            }
            WizardError::Rejected(Rejection::EmptyName) => ErrorCode::EmptyField,
            WizardError::Rejected(_) => ErrorCode::ValidationFailed,
            WizardError::Scoring(err) => err.code(),
        }
    }
}

impl From<Rejection> for WizardError {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::NoOptions => WizardError::Scoring(ScoringError::NoOptions),
            other => WizardError::Rejected(other),
        }
    }
}

impl From<WizardError> for DomainError {
    fn from(err: WizardError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
