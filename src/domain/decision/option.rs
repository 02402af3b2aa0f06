//! DecisionOption entity - a candidate being evaluated (e.g. a job offer).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{Rating, ValidationError};

use super::{normalize_name, Domain};

/// A candidate option with one rating per domain.
///
/// # Invariants
///
/// - `name` is trimmed and non-empty
/// - `scores` holds a rating for every domain that existed when the option
///   was created; domains added later have no entry until rated
/// - `total_score` is only ever written by the scoring engine and is cleared
///   whenever an input to it changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionOption {
    name: String,
    scores: BTreeMap<String, Rating>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    total_score: Option<u32>,
}

impl DecisionOption {
    /// Creates an option seeded with `default_rating` for each known domain.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank after trimming
    pub fn new(
        name: &str,
        domains: &[Domain],
        default_rating: Rating,
    ) -> Result<Self, ValidationError> {
        let scores = domains
            .iter()
            .map(|d| (d.name().to_string(), default_rating))
            .collect();

        Ok(Self {
            name: normalize_name(name, "option_name")?,
            scores,
            total_score: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the rating for a domain, if one has been recorded.
    pub fn rating_for(&self, domain_name: &str) -> Option<Rating> {
        self.scores.get(domain_name).copied()
    }

    /// Returns all recorded ratings keyed by domain name.
    pub fn scores(&self) -> &BTreeMap<String, Rating> {
        &self.scores
    }

    /// Returns the last computed total, or None if stale.
    pub fn total_score(&self) -> Option<u32> {
        self.total_score
    }

    /// Records a rating for one domain. Returns the previous rating, if any.
    ///
    /// Clears the computed total.
    pub fn set_rating(&mut self, domain_name: &str, rating: Rating) -> Option<Rating> {
        self.total_score = None;
        self.scores.insert(domain_name.to_string(), rating)
    }

    pub(crate) fn set_total_score(&mut self, total: u32) {
        self.total_score = Some(total);
    }

    pub(crate) fn clear_total_score(&mut self) {
        self.total_score = None;
    }
}
