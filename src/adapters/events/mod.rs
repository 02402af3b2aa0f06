//! Event publisher adapters.
//!
//! - `InMemoryEventBus` - Captures envelopes in memory
//! - `TracingEventPublisher` - Writes events to the log

mod in_memory;
mod tracing_publisher;

pub use in_memory::InMemoryEventBus;
pub use tracing_publisher::TracingEventPublisher;
