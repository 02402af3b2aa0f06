//! WizardSession aggregate - the single owner of all wizard state.
//!
//! Every change goes through [`WizardSession::apply`], which resolves the
//! action against the transition table, performs its side effect, and
//! records the resulting events.

use serde::{Deserialize, Serialize};

use crate::domain::decision::{DecisionOption, Domain};
use crate::domain::foundation::{
    EventId, Importance, Rating, SessionId, StateMachine, Timestamp,
};
use crate::domain::scoring::{
    Ranking, ResultsCalculated, ScoringAnalyzer, ScoringInsights, WeightedScorer,
};

use super::events::{DomainAdded, OptionAdded, StepChanged, WizardEvent, WizardRestarted};
use super::transition::{self, Rejection, Transition, TransitionGuards};
use super::{ActionKind, Feeling, WizardAction, WizardSnapshot, WizardStep};

/// Number of domains the user must name before moving on.
pub const DEFAULT_REQUIRED_DOMAINS: usize = 3;

/// Tunables fixed for the lifetime of a session (and kept across restarts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardSettings {
    pub required_domains: usize,
    pub default_rating: Rating,
}

impl Default for WizardSettings {
    fn default() -> Self {
        Self {
            required_domains: DEFAULT_REQUIRED_DOMAINS,
            default_rating: Rating::MIDPOINT,
        }
    }
}

/// Result of applying one action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The step pointer moved.
    Advanced { from: WizardStep, to: WizardStep },
    /// An in-step value changed.
    Updated,
    /// The session was discarded and started over.
    Reset,
    /// Nothing changed.
    Rejected(Rejection),
}

impl Outcome {
    /// Returns true unless the action was rejected.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Outcome::Rejected(_))
    }

    /// Returns the rejection reason, if any.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Outcome::Rejected(r) => Some(r),
            _ => None,
        }
    }
}

/// Wizard session aggregate.
///
/// # Invariants
///
/// - `domains.len()` never exceeds `settings.required_domains`
/// - domain names are unique
/// - every importance and rating is within 1..=10
/// - `ranking` and option totals are present only while they match the
///   current domains and ratings
#[derive(Debug, Clone)]
pub struct WizardSession {
    id: SessionId,
    settings: WizardSettings,
    step: WizardStep,
    is_own_decision: Option<bool>,
    domains: Vec<Domain>,
    options: Vec<DecisionOption>,
    has_dealbreakers: Option<bool>,
    options_violate_dealbreakers: Option<bool>,
    feeling: Option<Feeling>,
    ranking: Option<Ranking>,
    insights: Option<ScoringInsights>,
    started_at: Timestamp,
    pending_events: Vec<WizardEvent>,
}

impl WizardSession {
    /// Creates a fresh session at the ownership check.
    pub fn new(settings: WizardSettings) -> Self {
        Self {
            id: SessionId::new(),
            settings,
            step: WizardStep::OwnershipCheck,
            is_own_decision: None,
            domains: Vec::new(),
            options: Vec::new(),
            has_dealbreakers: None,
            options_violate_dealbreakers: None,
            feeling: None,
            ranking: None,
            insights: None,
            started_at: Timestamp::now(),
            pending_events: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn settings(&self) -> &WizardSettings {
        &self.settings
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn is_own_decision(&self) -> Option<bool> {
        self.is_own_decision
    }

    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    pub fn options(&self) -> &[DecisionOption] {
        &self.options
    }

    pub fn has_dealbreakers(&self) -> Option<bool> {
        self.has_dealbreakers
    }

    pub fn options_violate_dealbreakers(&self) -> Option<bool> {
        self.options_violate_dealbreakers
    }

    pub fn feeling(&self) -> Option<Feeling> {
        self.feeling
    }

    /// Returns the ranking computed on entry to the results step.
    pub fn ranking(&self) -> Option<&Ranking> {
        self.ranking.as_ref()
    }

    /// Returns the analysis computed alongside the ranking.
    pub fn insights(&self) -> Option<&ScoringInsights> {
        self.insights.as_ref()
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    /// Counts the transition guards read.
    pub fn guards(&self) -> TransitionGuards {
        TransitionGuards {
            domain_count: self.domains.len(),
            required_domains: self.settings.required_domains,
            option_count: self.options.len(),
        }
    }

    /// Action kinds currently enabled.
    pub fn legal_actions(&self) -> Vec<ActionKind> {
        transition::legal_actions(self.step, &self.guards())
    }

    /// Read-only view for rendering.
    pub fn snapshot(&self) -> WizardSnapshot {
        WizardSnapshot::of(self)
    }

    /// Removes and returns events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<WizardEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies one user action.
    ///
    /// Rejected actions leave every field unchanged.
    pub fn apply(&mut self, action: WizardAction) -> Outcome {
        let resolved = transition::transition(self.step, &action, &self.guards())
            .and_then(|t| self.execute(t, action));

        match resolved {
            Ok(outcome) => outcome,
            Err(rejection) => Outcome::Rejected(rejection),
        }
    }

    fn execute(
        &mut self,
        transition: Transition,
        action: WizardAction,
    ) -> Result<Outcome, Rejection> {
        match transition {
            Transition::Stay => {
                self.apply_edit(action)?;
                Ok(Outcome::Updated)
            }
            Transition::Move(to) => {
                let from = self.step;
                let to = from
                    .transition_to(to)
                    .map_err(|_| Rejection::InvalidTransition { from, to })?;
                let trigger = action.kind();
                self.record_answer(action)?;
                self.step = to;
                self.record(WizardEvent::StepChanged(StepChanged {
                    event_id: EventId::new(),
                    session_id: self.id,
                    from,
                    to,
                    trigger,
                    changed_at: Timestamp::now(),
                }));
                Ok(Outcome::Advanced { from, to })
            }
            Transition::Reset => {
                self.reset();
                Ok(Outcome::Reset)
            }
        }
    }

    /// In-step edits. Validates fully before mutating.
    fn apply_edit(&mut self, action: WizardAction) -> Result<(), Rejection> {
        match action {
            WizardAction::AddDomain { name } => self.add_domain(&name),
            WizardAction::SetDomainImportance { domain, value } => {
                let target = self
                    .domains
                    .iter_mut()
                    .find(|d| d.name() == domain.trim())
                    .ok_or(Rejection::UnknownDomain(domain))?;
                target.set_importance(Importance::clamped(value));
                self.invalidate_results();
                Ok(())
            }
            WizardAction::AddOption { name } => self.add_option(&name),
            WizardAction::SetOptionScore { option, domain, value } => {
                let domain_name = self
                    .domains
                    .iter()
                    .find(|d| d.name() == domain.trim())
                    .map(|d| d.name().to_string())
                    .ok_or(Rejection::UnknownDomain(domain))?;
                let target = self
                    .options
                    .iter_mut()
                    .find(|o| o.name() == option.trim())
                    .ok_or(Rejection::UnknownOption(option))?;
                target.set_rating(&domain_name, Rating::clamped(value));
                self.invalidate_results();
                Ok(())
            }
            other => Err(Rejection::NotAvailable {
                step: self.step,
                action: other.kind(),
            }),
        }
    }

    fn add_domain(&mut self, name: &str) -> Result<(), Rejection> {
        let domain = Domain::with_default_importance(name).map_err(|_| Rejection::EmptyName)?;
        if self.domains.iter().any(|d| d.name() == domain.name()) {
            return Err(Rejection::DuplicateDomain(domain.name().to_string()));
        }

        let event = DomainAdded {
            event_id: EventId::new(),
            session_id: self.id,
            domain_name: domain.name().to_string(),
            importance: domain.importance().value(),
            domain_count: self.domains.len() + 1,
            added_at: Timestamp::now(),
        };
        self.domains.push(domain);
        self.invalidate_results();
        self.record(WizardEvent::DomainAdded(event));
        Ok(())
    }

    fn add_option(&mut self, name: &str) -> Result<(), Rejection> {
        let option = DecisionOption::new(name, &self.domains, self.settings.default_rating)
            .map_err(|_| Rejection::EmptyName)?;
        if self.options.iter().any(|o| o.name() == option.name()) {
            return Err(Rejection::DuplicateOption(option.name().to_string()));
        }

        let event = OptionAdded {
            event_id: EventId::new(),
            session_id: self.id,
            option_name: option.name().to_string(),
            seeded_domains: option.scores().keys().cloned().collect(),
            added_at: Timestamp::now(),
        };
        self.options.push(option);
        self.invalidate_results();
        self.record(WizardEvent::OptionAdded(event));
        Ok(())
    }

    /// Stores the answer carried by a step-changing action.
    fn record_answer(&mut self, action: WizardAction) -> Result<(), Rejection> {
        match action {
            WizardAction::AnswerOwnership { is_own } => self.is_own_decision = Some(is_own),
            WizardAction::AnswerHasDealbreakers { has_dealbreakers } => {
                self.has_dealbreakers = Some(has_dealbreakers)
            }
            WizardAction::AnswerOptionsViolateDealbreakers { violated } => {
                self.options_violate_dealbreakers = Some(violated)
            }
            WizardAction::CalculateResults => self.calculate()?,
            WizardAction::AnswerFeeling { feeling } => {
                self.feeling = Some(feeling);
                if feeling == Feeling::NotGreat {
                    // domains reopen for re-weighting, so the old totals go stale
                    self.invalidate_results();
                }
            }
            WizardAction::AdvanceFromDomains | WizardAction::AdvanceFromOptions => {}
            other => {
                return Err(Rejection::NotAvailable {
                    step: self.step,
                    action: other.kind(),
                })
            }
        }
        Ok(())
    }

    fn calculate(&mut self) -> Result<(), Rejection> {
        let ranking =
            WeightedScorer::rank(&self.domains, &self.options).map_err(|_| Rejection::NoOptions)?;
        let insights = ScoringAnalyzer::analyze(&self.domains, &self.options);

        for entry in ranking.entries() {
            if let Some(option) = self.options.get_mut(entry.insertion_index) {
                option.set_total_score(entry.total_score);
            }
        }

        self.record(WizardEvent::ResultsCalculated(ResultsCalculated::new(
            self.id, &ranking, &insights,
        )));
        self.ranking = Some(ranking);
        self.insights = Some(insights);
        Ok(())
    }

    fn invalidate_results(&mut self) {
        self.ranking = None;
        self.insights = None;
        for option in &mut self.options {
            option.clear_total_score();
        }
    }

    /// Replaces every field with a fresh session, keeping settings and
    /// any events not yet drained.
    fn reset(&mut self) {
        let previous_id = self.id;
        let restarted_from = self.step;
        let pending = std::mem::take(&mut self.pending_events);

        *self = Self::new(self.settings);
        self.pending_events = pending;
        self.record(WizardEvent::WizardRestarted(WizardRestarted {
            event_id: EventId::new(),
            session_id: previous_id,
            new_session_id: self.id,
            restarted_from,
            restarted_at: Timestamp::now(),
        }));
    }

    fn record(&mut self, event: WizardEvent) {
        self.pending_events.push(event);
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new(WizardSettings::default())
    }
}
