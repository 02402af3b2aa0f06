//! Domain event plumbing shared by every aggregate.
//!
//! Aggregates record plain event structs. Before publication each one is
//! wrapped in an [`EventEnvelope`] whose JSON payload is the struct itself.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use uuid::Uuid;

use super::{DomainError, Timestamp};

/// Identity and routing data every recorded event exposes.
///
/// Implement with [`domain_event!`](crate::domain_event) rather than by hand.
pub trait DomainEvent: Send + Sync {
    /// Routing key ending in a version suffix, e.g. "wizard.step_changed.v1".
    fn event_type(&self) -> &'static str;

    /// ID of the aggregate that recorded the event.
    fn aggregate_id(&self) -> String;

    fn aggregate_type(&self) -> &'static str;

    fn occurred_at(&self) -> Timestamp;

    fn event_id(&self) -> EventId;
}

/// Implements [`DomainEvent`] by naming the struct fields that hold each value.
///
/// ```ignore
/// domain_event!(
///     WizardRestarted,
///     event_type = "wizard.restarted.v1",
///     aggregate_id = session_id,
///     aggregate_type = "WizardSession",
///     occurred_at = restarted_at,
///     event_id = event_id
/// );
/// ```
#[macro_export]
macro_rules! domain_event {
    (
        $event_name:ident,
        event_type = $event_type:expr,
        aggregate_id = $agg_id_field:ident,
        aggregate_type = $agg_type:expr,
        occurred_at = $occurred_field:ident,
        event_id = $event_id_field:ident
    ) => {
        impl $crate::domain::foundation::DomainEvent for $event_name {
            fn event_type(&self) -> &'static str {
                $event_type
            }

            fn aggregate_id(&self) -> String {
                self.$agg_id_field.to_string()
            }

            fn aggregate_type(&self) -> &'static str {
                $agg_type
            }

            fn occurred_at(&self) -> $crate::domain::foundation::Timestamp {
                self.$occurred_field
            }

            fn event_id(&self) -> $crate::domain::foundation::EventId {
                self.$event_id_field.clone()
            }
        }
    };
}

pub use crate::domain_event;

/// Unique event identifier, a UUID v4 rendered as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Context attached at publication time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    /// Shared by every event one controller call produced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
}

/// Transport form of a domain event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub event_id: EventId,
    pub event_type: String,
    /// Parsed from the `.vN` suffix of `event_type`; 1 when absent.
    pub schema_version: u32,
    pub aggregate_id: String,
    pub aggregate_type: String,
    pub occurred_at: Timestamp,
    pub payload: JsonValue,
    pub metadata: EventMetadata,
}

impl EventEnvelope {
    /// Builds an envelope around an arbitrary payload with a fresh id.
    pub fn new(
        event_type: impl Into<String>,
        aggregate_id: impl Into<String>,
        aggregate_type: impl Into<String>,
        payload: JsonValue,
    ) -> Self {
        let event_type = event_type.into();
        Self {
            event_id: EventId::new(),
            schema_version: version_of(&event_type),
            event_type,
            aggregate_id: aggregate_id.into(),
            aggregate_type: aggregate_type.into(),
            occurred_at: Timestamp::now(),
            payload,
            metadata: EventMetadata::default(),
        }
    }

    /// Wraps a recorded event, keeping its own id and timestamp.
    ///
    /// # Errors
    ///
    /// - `SerializationError` if the event cannot be encoded as JSON
    pub fn from_event<T>(event: &T) -> Result<Self, DomainError>
    where
        T: DomainEvent + Serialize,
    {
        let event_type = event.event_type();
        Ok(Self {
            event_id: event.event_id(),
            schema_version: version_of(event_type),
            event_type: event_type.to_string(),
            aggregate_id: event.aggregate_id(),
            aggregate_type: event.aggregate_type().to_string(),
            occurred_at: event.occurred_at(),
            payload: serde_json::to_value(event)?,
            metadata: EventMetadata::default(),
        })
    }

    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.metadata.correlation_id = Some(id.into());
        self
    }

    /// Decodes the payload back into an event struct.
    pub fn payload_as<T: for<'de> Deserialize<'de>>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.payload.clone())
    }
}

fn version_of(event_type: &str) -> u32 {
    event_type
        .rsplit_once(".v")
        .and_then(|(_, version)| version.parse().ok())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct SampleEvent {
        event_id: EventId,
        session: String,
        value: u32,
        happened_at: Timestamp,
    }

    domain_event!(
        SampleEvent,
        event_type = "sample.happened.v2",
        aggregate_id = session,
        aggregate_type = "Sample",
        occurred_at = happened_at,
        event_id = event_id
    );

    fn sample() -> SampleEvent {
        SampleEvent {
            event_id: EventId::from_string("evt-1"),
            session: "session-1".to_string(),
            value: 42,
            happened_at: Timestamp::now(),
        }
    }

    #[test]
    fn event_ids_are_unique_and_serialize_as_strings() {
        assert_ne!(EventId::new(), EventId::new());
        let json = serde_json::to_string(&EventId::from_string("test-id")).unwrap();
        assert_eq!(json, r#""test-id""#);
    }

    #[test]
    fn empty_metadata_serializes_to_empty_object() {
        let json = serde_json::to_value(EventMetadata::default()).unwrap();
        assert_eq!(json, json!({}));
    }

    #[test]
    fn version_comes_from_event_type_suffix() {
        assert_eq!(version_of("wizard.step_changed.v2"), 2);
        assert_eq!(version_of("wizard.step_changed.v10"), 10);
        assert_eq!(version_of("legacy.event"), 1);
    }

    #[test]
    fn new_envelope_has_fresh_id_and_no_metadata() {
        let envelope = EventEnvelope::new("wizard.test.v1", "agg-1", "Test", json!({"a": 1}));
        assert_eq!(envelope.schema_version, 1);
        assert_eq!(envelope.metadata, EventMetadata::default());
    }

    #[test]
    fn correlation_id_is_attached() {
        let envelope =
            EventEnvelope::new("t.v1", "a", "A", json!(null)).with_correlation_id("corr-1");
        assert_eq!(envelope.metadata.correlation_id.as_deref(), Some("corr-1"));
    }

    #[test]
    fn from_event_keeps_event_identity() {
        let event = sample();
        let envelope = EventEnvelope::from_event(&event).unwrap();

        assert_eq!(envelope.event_id.as_str(), "evt-1");
        assert_eq!(envelope.event_type, "sample.happened.v2");
        assert_eq!(envelope.schema_version, 2);
        assert_eq!(envelope.aggregate_id, "session-1");
        assert_eq!(envelope.aggregate_type, "Sample");
        assert_eq!(envelope.occurred_at, event.happened_at);
    }

    #[test]
    fn payload_decodes_back_or_fails_on_mismatch() {
        let envelope = EventEnvelope::from_event(&sample()).unwrap();
        let restored: SampleEvent = envelope.payload_as().unwrap();
        assert_eq!(restored.value, 42);

        let other = EventEnvelope::new("t.v1", "a", "A", json!({"unexpected": true}));
        assert!(other.payload_as::<SampleEvent>().is_err());
    }
}
