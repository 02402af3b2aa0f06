//! Adapters - Implementations of port interfaces.
//!
//! - `events` - Event publisher implementations (in-memory, tracing)

pub mod events;

pub use events::{InMemoryEventBus, TracingEventPublisher};
