//! Wizard domain events.
//!
//! Recorded by [`WizardSession`](super::WizardSession) as actions are
//! accepted and drained by the application layer for publication.
//! Slider edits are not evented; they are visible in the next snapshot.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    domain_event, DomainError, EventEnvelope, EventId, SessionId, Timestamp,
};
use crate::domain::scoring::ResultsCalculated;

use super::{ActionKind, WizardStep};

/// Published whenever the step pointer moves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepChanged {
    pub event_id: EventId,
    pub session_id: SessionId,
    pub from: WizardStep,
    pub to: WizardStep,
    /// The action that caused the move.
    pub trigger: ActionKind,
    pub changed_at: Timestamp,
}

domain_event!(
    StepChanged,
    event_type = "wizard.step_changed.v1",
    aggregate_id = session_id,
    aggregate_type = "WizardSession",
    occurred_at = changed_at,
    event_id = event_id
);

/// Published when a domain is added.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainAdded {
    pub event_id: EventId,
    pub session_id: SessionId,
    pub domain_name: String,
    pub importance: u8,
    /// Number of domains after the add.
    pub domain_count: usize,
    pub added_at: Timestamp,
}

domain_event!(
    DomainAdded,
    event_type = "wizard.domain_added.v1",
    aggregate_id = session_id,
    aggregate_type = "WizardSession",
    occurred_at = added_at,
    event_id = event_id
);

/// Published when an option is added.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionAdded {
    pub event_id: EventId,
    pub session_id: SessionId,
    pub option_name: String,
    /// Domains that received a default rating at creation.
    pub seeded_domains: Vec<String>,
    pub added_at: Timestamp,
}

domain_event!(
    OptionAdded,
    event_type = "wizard.option_added.v1",
    aggregate_id = session_id,
    aggregate_type = "WizardSession",
    occurred_at = added_at,
    event_id = event_id
);

/// Published when the session is discarded and started over.
///
/// The aggregate id is the discarded session; `new_session_id` is its successor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardRestarted {
    pub event_id: EventId,
    pub session_id: SessionId,
    pub new_session_id: SessionId,
    pub restarted_from: WizardStep,
    pub restarted_at: Timestamp,
}

domain_event!(
    WizardRestarted,
    event_type = "wizard.restarted.v1",
    aggregate_id = session_id,
    aggregate_type = "WizardSession",
    occurred_at = restarted_at,
    event_id = event_id
);

/// Any event the wizard session records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WizardEvent {
    StepChanged(StepChanged),
    DomainAdded(DomainAdded),
    OptionAdded(OptionAdded),
    ResultsCalculated(ResultsCalculated),
    WizardRestarted(WizardRestarted),
}

impl WizardEvent {
    /// Wraps the inner event in a transport envelope.
    pub fn to_envelope(&self) -> Result<EventEnvelope, DomainError> {
        match self {
            WizardEvent::StepChanged(e) => EventEnvelope::from_event(e),
            WizardEvent::DomainAdded(e) => EventEnvelope::from_event(e),
            WizardEvent::OptionAdded(e) => EventEnvelope::from_event(e),
            WizardEvent::ResultsCalculated(e) => EventEnvelope::from_event(e),
            WizardEvent::WizardRestarted(e) => EventEnvelope::from_event(e),
        }
    }
}
