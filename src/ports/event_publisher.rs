//! EventPublisher port - Interface for publishing domain events.
//!
//! The wizard hands drained events to this port without knowing where
//! they go (a log, an in-process bus, an analytics sink).

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for publishing domain events.
///
/// Implementations must ensure:
/// - Events are delivered in the order given
/// - Errors are propagated to the caller
///
/// # Example
///
/// ```ignore
/// for event in session.take_events() {
///     publisher.publish(event.to_envelope()?)?;
/// }
/// ```
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Publish multiple events in order.
    ///
    /// Stops at the first failure; earlier events stay published.
    fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event)?;
        }
        Ok(())
    }
}
