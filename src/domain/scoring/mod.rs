//! Scoring Engine - Pure weighted-sum scoring and ranking of options.
//!
//! # Components
//!
//! - `WeightedScorer` - total = Σ(rating × importance), stable ranking
//! - `Ranking` - ordered results with the top choice first
//! - `ScoringAnalyzer` - dominated options and domains that cannot change the outcome
//!
//! All functions are pure and deterministic. They take the session's
//! domains and options by reference and never mutate them.

mod analyzer;
mod errors;
mod events;
mod ranking;
mod weighted_scorer;

pub use analyzer::{DominatedOption, IndistinctDomain, ScoringAnalyzer, ScoringInsights};
pub use errors::ScoringError;
pub use events::ResultsCalculated;
pub use ranking::{Ranking, ScoredOption};
pub use weighted_scorer::WeightedScorer;
