//! Scoring domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, EventId, SessionId, Timestamp};

use super::{Ranking, ScoredOption, ScoringInsights};

/// Published when the wizard moves from scoring to results.
///
/// Carries the summarized outcome, not the raw ratings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsCalculated {
    pub event_id: EventId,
    pub session_id: SessionId,
    /// Entries best first.
    pub ranking: Vec<ScoredOption>,
    /// Name of the top-ranked option.
    pub top_option: Option<String>,
    /// True if the runner-up matched the top total.
    pub tied_at_top: bool,
    /// Names of options some other option dominates.
    pub dominated_options: Vec<String>,
    /// Names of domains that cannot change the ranking.
    pub indistinct_domains: Vec<String>,
    pub calculated_at: Timestamp,
}

impl ResultsCalculated {
    pub fn new(session_id: SessionId, ranking: &Ranking, insights: &ScoringInsights) -> Self {
        Self {
            event_id: EventId::new(),
            session_id,
            ranking: ranking.entries().to_vec(),
            top_option: ranking.top().map(|e| e.name.clone()),
            tied_at_top: ranking.is_tied_at_top(),
            dominated_options: insights
                .dominated
                .iter()
                .map(|d| d.option_name.clone())
                .collect(),
            indistinct_domains: insights
                .indistinct_domains
                .iter()
                .map(|d| d.domain_name.clone())
                .collect(),
            calculated_at: Timestamp::now(),
        }
    }
}

domain_event!(
    ResultsCalculated,
    event_type = "scoring.results_calculated.v1",
    aggregate_id = session_id,
    aggregate_type = "WizardSession",
    occurred_at = calculated_at,
    event_id = event_id
);
