//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, event plumbing and error types
//! that form the vocabulary of the decision wizard.

mod errors;
mod events;
mod ids;
mod scale;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata};
pub use ids::SessionId;
pub use scale::{Importance, Rating, ScaleValue};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
