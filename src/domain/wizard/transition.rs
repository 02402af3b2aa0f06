//! Transition table - the pure (step, action) → next step function.
//!
//! The table never touches session state. It reads the few counts the
//! guards need from [`TransitionGuards`] and answers with a [`Transition`]
//! or the reason the action is refused.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{ActionKind, Feeling, WizardAction, WizardStep};

/// Counts the guards depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionGuards {
    pub domain_count: usize,
    pub required_domains: usize,
    pub option_count: usize,
}

/// What an accepted action does to the step pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// In-step edit; the step does not change.
    Stay,
    /// Advance (or loop back) to another step.
    Move(WizardStep),
    /// Discard the session and start over at step 0.
    Reset,
}

/// Why an action was refused. Refused actions leave the session untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum Rejection {
    #[error("'{action}' is not available in step {step}")]
    NotAvailable { step: WizardStep, action: ActionKind },

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Domain '{0}' already exists")]
    DuplicateDomain(String),

    #[error("Option '{0}' already exists")]
    DuplicateOption(String),

    #[error("Already have the maximum of {limit} domains")]
    DomainLimitReached { limit: usize },

    #[error("Need exactly {required} domains to continue, have {actual}")]
    DomainCountNotMet { required: usize, actual: usize },

    #[error("Add at least one option first")]
    NoOptions,

    #[error("Unknown domain '{0}'")]
    UnknownDomain(String),

    #[error("Unknown option '{0}'")]
    UnknownOption(String),

    #[error("Cannot move from {from} to {to}")]
    InvalidTransition { from: WizardStep, to: WizardStep },
}

/// Checks that `kind` is accepted in `step` and that its guard holds.
pub fn check_guard(
    step: WizardStep,
    kind: ActionKind,
    guards: &TransitionGuards,
) -> Result<(), Rejection> {
    if !step.accepts(kind) {
        return Err(Rejection::NotAvailable { step, action: kind });
    }

    match kind {
        ActionKind::AddDomain if guards.domain_count >= guards.required_domains => {
            Err(Rejection::DomainLimitReached {
                limit: guards.required_domains,
            })
        }
        ActionKind::AdvanceFromDomains if guards.domain_count != guards.required_domains => {
            Err(Rejection::DomainCountNotMet {
                required: guards.required_domains,
                actual: guards.domain_count,
            })
        }
        ActionKind::AdvanceFromOptions | ActionKind::CalculateResults
            if guards.option_count == 0 =>
        {
            Err(Rejection::NoOptions)
        }
        _ => Ok(()),
    }
}

/// Resolves an action against the table.
///
/// Total over every (step, action) pair: each pair yields exactly one
/// transition or exactly one rejection.
pub fn transition(
    step: WizardStep,
    action: &WizardAction,
    guards: &TransitionGuards,
) -> Result<Transition, Rejection> {
    check_guard(step, action.kind(), guards)?;

    let next = match action {
        WizardAction::AnswerOwnership { is_own: true } => {
            Transition::Move(WizardStep::DomainCollection)
        }
        WizardAction::AnswerOwnership { is_own: false } => {
            Transition::Move(WizardStep::NotYourDecision)
        }
        WizardAction::AdvanceFromDomains => Transition::Move(WizardStep::OptionCollection),
        WizardAction::AdvanceFromOptions => Transition::Move(WizardStep::DealbreakerCheck),
        WizardAction::AnswerHasDealbreakers {
            has_dealbreakers: true,
        } => Transition::Move(WizardStep::DealbreakerScreen),
        WizardAction::AnswerHasDealbreakers {
            has_dealbreakers: false,
        } => Transition::Move(WizardStep::Scoring),
        // recorded only; both answers continue to scoring
        WizardAction::AnswerOptionsViolateDealbreakers { .. } => {
            Transition::Move(WizardStep::Scoring)
        }
        WizardAction::CalculateResults => Transition::Move(WizardStep::Results),
        WizardAction::AnswerFeeling {
            feeling: Feeling::Great,
        } => Transition::Move(WizardStep::Complete),
        WizardAction::AnswerFeeling {
            feeling: Feeling::NotGreat,
        } => Transition::Move(WizardStep::DomainCollection),
        WizardAction::Restart => Transition::Reset,
        WizardAction::AddDomain { .. }
        | WizardAction::SetDomainImportance { .. }
        | WizardAction::AddOption { .. }
        | WizardAction::SetOptionScore { .. } => Transition::Stay,
    };

    Ok(next)
}

/// Action kinds that would currently be accepted.
pub fn legal_actions(step: WizardStep, guards: &TransitionGuards) -> Vec<ActionKind> {
    step.accepted_actions()
        .iter()
        .copied()
        .filter(|kind| check_guard(step, *kind, guards).is_ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::StateMachine;

    fn guards(domain_count: usize, option_count: usize) -> TransitionGuards {
        TransitionGuards {
            domain_count,
            required_domains: 3,
            option_count,
        }
    }

    fn sample_actions() -> Vec<WizardAction> {
        vec![
            WizardAction::AnswerOwnership { is_own: true },
            WizardAction::AnswerOwnership { is_own: false },
            WizardAction::AddDomain { name: "Salary".into() },
            WizardAction::SetDomainImportance { domain: "Salary".into(), value: 8 },
            WizardAction::AdvanceFromDomains,
            WizardAction::AddOption { name: "A".into() },
            WizardAction::AdvanceFromOptions,
            WizardAction::AnswerHasDealbreakers { has_dealbreakers: true },
            WizardAction::AnswerHasDealbreakers { has_dealbreakers: false },
            WizardAction::AnswerOptionsViolateDealbreakers { violated: true },
            WizardAction::AnswerOptionsViolateDealbreakers { violated: false },
            WizardAction::SetOptionScore { option: "A".into(), domain: "Salary".into(), value: 9 },
            WizardAction::CalculateResults,
            WizardAction::AnswerFeeling { feeling: Feeling::Great },
            WizardAction::AnswerFeeling { feeling: Feeling::NotGreat },
            WizardAction::Restart,
        ]
    }

    #[test]
    fn ownership_yes_goes_to_domains() {
        let result = transition(
            WizardStep::OwnershipCheck,
            &WizardAction::AnswerOwnership { is_own: true },
            &guards(0, 0),
        );
        assert_eq!(result, Ok(Transition::Move(WizardStep::DomainCollection)));
    }

    #[test]
    fn ownership_no_goes_to_not_your_decision() {
        let result = transition(
            WizardStep::OwnershipCheck,
            &WizardAction::AnswerOwnership { is_own: false },
            &guards(0, 0),
        );
        assert_eq!(result, Ok(Transition::Move(WizardStep::NotYourDecision)));
    }

    #[test]
    fn advance_from_domains_requires_exactly_three() {
        let step = WizardStep::DomainCollection;
        let action = WizardAction::AdvanceFromDomains;

        for count in [0, 1, 2, 4] {
            assert_eq!(
                transition(step, &action, &guards(count, 0)),
                Err(Rejection::DomainCountNotMet { required: 3, actual: count })
            );
        }
        assert_eq!(
            transition(step, &action, &guards(3, 0)),
            Ok(Transition::Move(WizardStep::OptionCollection))
        );
    }

    #[test]
    fn add_domain_disabled_at_limit() {
        let action = WizardAction::AddDomain { name: "Fourth".into() };
        assert_eq!(
            transition(WizardStep::DomainCollection, &action, &guards(3, 0)),
            Err(Rejection::DomainLimitReached { limit: 3 })
        );
        assert_eq!(
            transition(WizardStep::DomainCollection, &action, &guards(2, 0)),
            Ok(Transition::Stay)
        );
    }

    #[test]
    fn advance_from_options_requires_one_option() {
        let step = WizardStep::OptionCollection;
        assert_eq!(
            transition(step, &WizardAction::AdvanceFromOptions, &guards(3, 0)),
            Err(Rejection::NoOptions)
        );
        assert_eq!(
            transition(step, &WizardAction::AdvanceFromOptions, &guards(3, 1)),
            Ok(Transition::Move(WizardStep::DealbreakerCheck))
        );
    }

    #[test]
    fn dealbreaker_answers_route_correctly() {
        let g = guards(3, 1);
        assert_eq!(
            transition(
                WizardStep::DealbreakerCheck,
                &WizardAction::AnswerHasDealbreakers { has_dealbreakers: true },
                &g
            ),
            Ok(Transition::Move(WizardStep::DealbreakerScreen))
        );
        assert_eq!(
            transition(
                WizardStep::DealbreakerCheck,
                &WizardAction::AnswerHasDealbreakers { has_dealbreakers: false },
                &g
            ),
            Ok(Transition::Move(WizardStep::Scoring))
        );
        for violated in [true, false] {
            assert_eq!(
                transition(
                    WizardStep::DealbreakerScreen,
                    &WizardAction::AnswerOptionsViolateDealbreakers { violated },
                    &g
                ),
                Ok(Transition::Move(WizardStep::Scoring))
            );
        }
    }

    #[test]
    fn feeling_routes_to_complete_or_back_to_domains() {
        let g = guards(3, 2);
        assert_eq!(
            transition(
                WizardStep::Results,
                &WizardAction::AnswerFeeling { feeling: Feeling::Great },
                &g
            ),
            Ok(Transition::Move(WizardStep::Complete))
        );
        assert_eq!(
            transition(
                WizardStep::Results,
                &WizardAction::AnswerFeeling { feeling: Feeling::NotGreat },
                &g
            ),
            Ok(Transition::Move(WizardStep::DomainCollection))
        );
    }

    #[test]
    fn restart_resets_from_every_step() {
        for step in WizardStep::ALL {
            assert_eq!(
                transition(step, &WizardAction::Restart, &guards(0, 0)),
                Ok(Transition::Reset)
            );
        }
    }

    #[test]
    fn wrong_step_is_rejected() {
        let result = transition(
            WizardStep::Complete,
            &WizardAction::AddOption { name: "Late".into() },
            &guards(3, 1),
        );
        assert_eq!(
            result,
            Err(Rejection::NotAvailable {
                step: WizardStep::Complete,
                action: ActionKind::AddOption
            })
        );
    }

    #[test]
    fn every_move_is_a_valid_state_machine_edge() {
        let g = guards(3, 1);
        for step in WizardStep::ALL {
            for action in sample_actions() {
                if let Ok(Transition::Move(to)) = transition(step, &action, &g) {
                    assert!(
                        step.can_transition_to(&to),
                        "{:?} --{:?}--> {:?} is not an edge",
                        step,
                        action,
                        to
                    );
                }
            }
        }
    }

    #[test]
    fn legal_actions_reflect_guards() {
        let step = WizardStep::DomainCollection;
        assert_eq!(
            legal_actions(step, &guards(2, 0)),
            vec![ActionKind::AddDomain, ActionKind::SetDomainImportance, ActionKind::Restart]
        );
        assert_eq!(
            legal_actions(step, &guards(3, 0)),
            vec![
                ActionKind::SetDomainImportance,
                ActionKind::AdvanceFromDomains,
                ActionKind::Restart
            ]
        );
    }

    #[test]
    fn legal_actions_at_terminal_is_restart_only() {
        assert_eq!(
            legal_actions(WizardStep::NotYourDecision, &guards(0, 0)),
            vec![ActionKind::Restart]
        );
    }

    #[test]
    fn rejection_messages_are_readable() {
        let rejection = Rejection::DomainCountNotMet { required: 3, actual: 2 };
        assert_eq!(
            rejection.to_string(),
            "Need exactly 3 domains to continue, have 2"
        );
    }
}
