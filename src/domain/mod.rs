//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (scale values, IDs, events, errors)
//! - `decision` - Domain and option entities
//! - `scoring` - Pure weighted-sum scoring, ranking and analysis
//! - `wizard` - Step machine and the session aggregate

pub mod decision;
pub mod foundation;
pub mod scoring;
pub mod wizard;
