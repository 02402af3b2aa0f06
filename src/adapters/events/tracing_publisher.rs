//! Publisher that writes each event to the tracing subscriber.

use tracing::info;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventPublisher;

/// Logs every event as a structured `info` record under the
/// `decision_anatomy::events` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventPublisher {
    include_payload: bool,
}

impl TracingEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also log the JSON payload.
    pub fn with_payload(mut self) -> Self {
        self.include_payload = true;
        self
    }
}

impl EventPublisher for TracingEventPublisher {
    fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        if self.include_payload {
            info!(
                target: "decision_anatomy::events",
                event_id = %event.event_id,
                event_type = %event.event_type,
                session_id = %event.aggregate_id,
                payload = %event.payload,
                "event published"
            );
        } else {
            info!(
                target: "decision_anatomy::events",
                event_id = %event.event_id,
                event_type = %event.event_type,
                session_id = %event.aggregate_id,
                "event published"
            );
        }
        Ok(())
    }
}
