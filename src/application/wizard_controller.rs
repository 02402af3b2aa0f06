//! WizardController - the operation surface the presentation layer calls.
//!
//! Owns the single [`WizardSession`] and forwards each call as one
//! [`WizardAction`]. After every accepted action the session's recorded
//! events are wrapped in envelopes sharing one correlation id and handed
//! to the publisher.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::decision::DecisionOption;
use crate::domain::scoring::{Ranking, ScoringError, ScoringInsights};
use crate::domain::wizard::{
    ActionKind, Feeling, Outcome, WizardAction, WizardError, WizardEvent, WizardSession,
    WizardSettings, WizardSnapshot, WizardStep,
};
use crate::ports::EventPublisher;

/// Controller for one wizard session.
pub struct WizardController {
    session: WizardSession,
    event_publisher: Arc<dyn EventPublisher>,
}

impl WizardController {
    pub fn new(settings: WizardSettings, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            session: WizardSession::new(settings),
            event_publisher,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Read-only view of the current state.
    pub fn state(&self) -> WizardSnapshot {
        self.session.snapshot()
    }

    pub fn step(&self) -> WizardStep {
        self.session.step()
    }

    /// Action kinds the presentation layer should enable.
    pub fn legal_actions(&self) -> Vec<ActionKind> {
        self.session.legal_actions()
    }

    /// The last ranking, if results are current.
    pub fn results(&self) -> Option<&Ranking> {
        self.session.ranking()
    }

    /// Options in ranked order, each carrying its total.
    ///
    /// Empty unless results are current.
    pub fn ranked_options(&self) -> Vec<DecisionOption> {
        let options = self.session.options();
        self.session
            .ranking()
            .map(|ranking| {
                ranking
                    .entries()
                    .iter()
                    .filter_map(|entry| options.get(entry.insertion_index).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Dominated options and indistinct domains found with the last ranking.
    pub fn insights(&self) -> Option<&ScoringInsights> {
        self.session.insights()
    }

    pub fn session(&self) -> &WizardSession {
        &self.session
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Commands
    // ─────────────────────────────────────────────────────────────────────────

    pub fn submit_ownership(&mut self, is_own: bool) -> Outcome {
        self.dispatch(WizardAction::AnswerOwnership { is_own })
    }

    pub fn add_domain(&mut self, name: &str) -> Outcome {
        self.dispatch(WizardAction::AddDomain {
            name: name.to_string(),
        })
    }

    /// Slider input; values outside 1..=10 are clamped.
    pub fn set_domain_importance(&mut self, name: &str, value: i64) -> Outcome {
        self.dispatch(WizardAction::SetDomainImportance {
            domain: name.to_string(),
            value,
        })
    }

    pub fn advance_from_domains(&mut self) -> Outcome {
        self.dispatch(WizardAction::AdvanceFromDomains)
    }

    pub fn add_option(&mut self, name: &str) -> Outcome {
        self.dispatch(WizardAction::AddOption {
            name: name.to_string(),
        })
    }

    pub fn advance_from_options(&mut self) -> Outcome {
        self.dispatch(WizardAction::AdvanceFromOptions)
    }

    pub fn submit_has_dealbreakers(&mut self, has_dealbreakers: bool) -> Outcome {
        self.dispatch(WizardAction::AnswerHasDealbreakers { has_dealbreakers })
    }

    pub fn submit_options_violate_dealbreakers(&mut self, violated: bool) -> Outcome {
        self.dispatch(WizardAction::AnswerOptionsViolateDealbreakers { violated })
    }

    /// Slider input; values outside 1..=10 are clamped.
    pub fn set_option_score(&mut self, option: &str, domain: &str, value: i64) -> Outcome {
        self.dispatch(WizardAction::SetOptionScore {
            option: option.to_string(),
            domain: domain.to_string(),
            value,
        })
    }

    /// Scores every option, moves to the results step and returns the
    /// options best first, each carrying its total.
    ///
    /// The rank, margin and tie details stay available through [`results`](Self::results).
    ///
    /// # Errors
    ///
    /// - `WizardError::Rejected` if the wizard is not at the scoring step
    /// - `WizardError::Scoring(NoOptions)` if there is nothing to rank
    pub fn calculate_results(&mut self) -> Result<Vec<DecisionOption>, WizardError> {
        if let Outcome::Rejected(rejection) = self.dispatch(WizardAction::CalculateResults) {
            return Err(rejection.into());
        }

        let ranked = self.ranked_options();
        if ranked.is_empty() {
            return Err(WizardError::Scoring(ScoringError::NoOptions));
        }
        Ok(ranked)
    }

    pub fn submit_feeling(&mut self, feeling: Feeling) -> Outcome {
        self.dispatch(WizardAction::AnswerFeeling { feeling })
    }

    /// Discards everything and starts over with a new session id.
    pub fn restart(&mut self) -> Outcome {
        self.dispatch(WizardAction::Restart)
    }

    /// Applies any action. The named operations above all route here.
    pub fn dispatch(&mut self, action: WizardAction) -> Outcome {
        let kind = action.kind();
        let outcome = self.session.apply(action);

        match &outcome {
            Outcome::Advanced { from, to } => {
                info!(session_id = %self.session.id(), %from, %to, action = %kind, "step changed")
            }
            Outcome::Updated => {
                debug!(session_id = %self.session.id(), action = %kind, "session updated")
            }
            Outcome::Reset => info!(session_id = %self.session.id(), "wizard restarted"),
            Outcome::Rejected(rejection) => warn!(
                session_id = %self.session.id(),
                step = %self.session.step(),
                action = %kind,
                reason = %rejection,
                "action rejected"
            ),
        }

        self.publish_pending();
        outcome
    }

    fn publish_pending(&mut self) {
        let events = self.session.take_events();
        if events.is_empty() {
            return;
        }

        let correlation_id = Uuid::new_v4().to_string();
        for event in events {
            if let WizardEvent::ResultsCalculated(results) = &event {
                info!(
                    session_id = %results.session_id,
                    top_option = ?results.top_option,
                    tied_at_top = results.tied_at_top,
                    "results calculated"
                );
            }

            let envelope = match event.to_envelope() {
                Ok(envelope) => envelope.with_correlation_id(correlation_id.clone()),
                Err(err) => {
                    warn!(error = %err, "failed to build event envelope");
                    continue;
                }
            };

            let event_type = envelope.event_type.clone();
            if let Err(err) = self.event_publisher.publish(envelope) {
                warn!(%event_type, error = %err, "event publication failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryEventBus;
    use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
    use crate::domain::wizard::Rejection;

    struct FailingPublisher;

    impl EventPublisher for FailingPublisher {
        fn publish(&self, _: EventEnvelope) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::PublishFailed, "sink offline"))
        }
    }

    fn controller() -> (WizardController, Arc<InMemoryEventBus>) {
        let bus = Arc::new(InMemoryEventBus::new());
        let controller = WizardController::new(WizardSettings::default(), bus.clone());
        (controller, bus)
    }

    fn at_scoring(controller: &mut WizardController) {
        controller.submit_ownership(true);
        for (name, weight) in [("Salary", 8), ("Growth", 6), ("Culture", 4)] {
            controller.add_domain(name);
            controller.set_domain_importance(name, weight);
        }
        controller.advance_from_domains();
        controller.add_option("A");
        controller.add_option("B");
        controller.advance_from_options();
        controller.submit_has_dealbreakers(false);
        for (domain, a, b) in [("Salary", 9, 6), ("Growth", 5, 9), ("Culture", 7, 8)] {
            controller.set_option_score("A", domain, a);
            controller.set_option_score("B", domain, b);
        }
    }

    #[test]
    fn calculate_results_returns_options_best_first_with_totals() {
        let (mut controller, _) = controller();
        at_scoring(&mut controller);

        let ranked = controller.calculate_results().unwrap();

        let summary: Vec<_> = ranked
            .iter()
            .map(|o| (o.name().to_string(), o.total_score()))
            .collect();
        assert_eq!(
            summary,
            vec![("B".to_string(), Some(134)), ("A".to_string(), Some(130))]
        );
        assert_eq!(controller.step(), WizardStep::Results);
    }

    #[test]
    fn results_expose_rank_details_after_calculation() {
        let (mut controller, _) = controller();
        at_scoring(&mut controller);
        controller.calculate_results().unwrap();

        let ranking = controller.results().unwrap();
        assert_eq!(ranking.top().unwrap().name, "B");
        assert_eq!(ranking.get("A").unwrap().rank, 2);
        assert_eq!(ranking.margin(), Some(4));
    }

    #[test]
    fn calculate_results_outside_scoring_is_an_error() {
        let (mut controller, _) = controller();

        let err = controller.calculate_results().unwrap_err();

        assert_eq!(err.code(), ErrorCode::ActionNotAvailable);
        assert_eq!(
            err,
            WizardError::Rejected(Rejection::NotAvailable {
                step: WizardStep::OwnershipCheck,
                action: ActionKind::CalculateResults,
            })
        );
    }

    #[test]
    fn scoring_error_variant_maps_to_no_options_code() {
        let err = WizardError::Scoring(ScoringError::NoOptions);
        assert_eq!(err.code(), ErrorCode::NoOptionsToScore);
    }

    #[test]
    fn events_from_one_action_share_a_correlation_id() {
        let (mut controller, bus) = controller();
        at_scoring(&mut controller);
        bus.clear();

        controller.calculate_results().unwrap();

        let events = bus.published_events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type, "scoring.results_calculated.v1");
        assert_eq!(events[1].event_type, "wizard.step_changed.v1");
        assert!(events[0].metadata.correlation_id.is_some());
        assert_eq!(events[0].metadata.correlation_id, events[1].metadata.correlation_id);
    }

    #[test]
    fn slider_edits_publish_nothing() {
        let (mut controller, bus) = controller();
        controller.submit_ownership(true);
        controller.add_domain("Salary");
        bus.clear();

        controller.set_domain_importance("Salary", 9);

        assert_eq!(bus.event_count(), 0);
    }

    #[test]
    fn publisher_failure_does_not_affect_state() {
        let mut controller =
            WizardController::new(WizardSettings::default(), Arc::new(FailingPublisher));

        let outcome = controller.submit_ownership(true);

        assert!(outcome.is_accepted());
        assert_eq!(controller.step(), WizardStep::DomainCollection);
    }

    #[test]
    fn restart_returns_fresh_state() {
        let (mut controller, bus) = controller();
        controller.submit_ownership(false);
        let old_id = controller.state().session_id;

        assert_eq!(controller.restart(), Outcome::Reset);

        let state = controller.state();
        assert_ne!(state.session_id, old_id);
        assert_eq!(state.step, WizardStep::OwnershipCheck);
        assert!(bus.has_event("wizard.restarted.v1"));
    }
}
