//! Weighted Scorer - Σ(rating × importance) per option and the resulting ranking.

use crate::domain::decision::{DecisionOption, Domain};

use super::{Ranking, ScoringError};

/// Weighted-sum scoring functions.
pub struct WeightedScorer;

impl WeightedScorer {
    /// Computes one option's total.
    ///
    /// # Algorithm
    /// total = Σ over domains d ( rating[d] × importance[d] )
    ///
    /// # Edge Cases
    /// - No domains: 0
    /// - Missing rating for a domain: that domain contributes 0
    /// - Ratings for names that are not current domains: ignored
    pub fn total_for(option: &DecisionOption, domains: &[Domain]) -> u32 {
        domains
            .iter()
            .map(|domain| {
                let rating = option
                    .rating_for(domain.name())
                    .map(u32::from)
                    .unwrap_or(0);
                rating * u32::from(domain.importance())
            })
            .sum()
    }

    /// Computes totals for every option, in insertion order.
    pub fn compute_totals(domains: &[Domain], options: &[DecisionOption]) -> Vec<u32> {
        options
            .iter()
            .map(|option| Self::total_for(option, domains))
            .collect()
    }

    /// Scores and ranks all options.
    ///
    /// # Errors
    ///
    /// - `NoOptions` if `options` is empty
    pub fn rank(domains: &[Domain], options: &[DecisionOption]) -> Result<Ranking, ScoringError> {
        if options.is_empty() {
            return Err(ScoringError::NoOptions);
        }

        let totals = Self::compute_totals(domains, options);
        Ok(Ranking::from_totals(
            options.iter().map(|o| o.name()).zip(totals),
        ))
    }
}
