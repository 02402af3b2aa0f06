//! WizardStep enum - the screens of the decision wizard.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

use super::ActionKind;

/// Step of the wizard. The numeric ids are stable and shared with the
/// presentation layer.
///
/// ```text
/// 0 OwnershipCheck ──yes──► 1 DomainCollection ──► 2 OptionCollection ──► 3 DealbreakerCheck
///        │                        ▲                                          │yes      │no
///        no                       │ not great                                ▼         │
///        ▼                        │                              4 DealbreakerScreen   │
/// 8 NotYourDecision          6 Results ◄── 5 Scoring ◄───────────────────┴─────────────┘
///                                 │ great
///                                 ▼
///                            7 Complete
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    OwnershipCheck,
    DomainCollection,
    OptionCollection,
    DealbreakerCheck,
    DealbreakerScreen,
    Scoring,
    Results,
    Complete,
    NotYourDecision,
}

impl WizardStep {
    /// All steps in id order.
    pub const ALL: [WizardStep; 9] = [
        WizardStep::OwnershipCheck,
        WizardStep::DomainCollection,
        WizardStep::OptionCollection,
        WizardStep::DealbreakerCheck,
        WizardStep::DealbreakerScreen,
        WizardStep::Scoring,
        WizardStep::Results,
        WizardStep::Complete,
        WizardStep::NotYourDecision,
    ];

    /// Returns the numeric step id (0-8).
    pub fn id(&self) -> u8 {
        match self {
            WizardStep::OwnershipCheck => 0,
            WizardStep::DomainCollection => 1,
            WizardStep::OptionCollection => 2,
            WizardStep::DealbreakerCheck => 3,
            WizardStep::DealbreakerScreen => 4,
            WizardStep::Scoring => 5,
            WizardStep::Results => 6,
            WizardStep::Complete => 7,
            WizardStep::NotYourDecision => 8,
        }
    }

    /// Looks up a step by numeric id.
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    /// Screen heading.
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::OwnershipCheck => "Ownership Check",
            WizardStep::DomainCollection => "Important Domains",
            WizardStep::OptionCollection => "List Your Options",
            WizardStep::DealbreakerCheck => "Dealbreakers",
            WizardStep::DealbreakerScreen => "Check Options",
            WizardStep::Scoring => "Score Options",
            WizardStep::Results => "Results",
            WizardStep::Complete => "Decision Complete",
            WizardStep::NotYourDecision => "Don't Make the Decision",
        }
    }

    /// Question or instruction shown to the user.
    ///
    /// `required_domains` is the configured domain count; only the domain
    /// step mentions it.
    pub fn prompt(&self, required_domains: usize) -> String {
        let text = match self {
            WizardStep::OwnershipCheck => "Is the choice yours to make?",
            WizardStep::DomainCollection if required_domains == 1 => {
                "What is the most important thing to you?"
            }
            WizardStep::DomainCollection => {
                return format!("What are the {required_domains} most important things to you?");
            }
            WizardStep::OptionCollection => "What options are you choosing between?",
            WizardStep::DealbreakerCheck => "Do you have any dealbreakers?",
            WizardStep::DealbreakerScreen => "Do any options have those dealbreakers?",
            WizardStep::Scoring => "Rate each option for each domain (1-10)",
            WizardStep::Results => "How do you feel about the top choice?",
            WizardStep::Complete => "You've made your decision following a structured process.",
            WizardStep::NotYourDecision => "This decision is not yours to make.",
        };
        text.to_string()
    }

    /// Action kinds this step responds to, before guards are applied.
    ///
    /// Restart is accepted everywhere so a stuck wizard can always be reset.
    pub fn accepted_actions(&self) -> &'static [ActionKind] {
        use ActionKind::*;
        match self {
            WizardStep::OwnershipCheck => &[AnswerOwnership, Restart],
            WizardStep::DomainCollection => {
                &[AddDomain, SetDomainImportance, AdvanceFromDomains, Restart]
            }
            WizardStep::OptionCollection => &[AddOption, AdvanceFromOptions, Restart],
            WizardStep::DealbreakerCheck => &[AnswerHasDealbreakers, Restart],
            WizardStep::DealbreakerScreen => &[AnswerOptionsViolateDealbreakers, Restart],
            WizardStep::Scoring => &[SetOptionScore, CalculateResults, Restart],
            WizardStep::Results => &[AnswerFeeling, Restart],
            WizardStep::Complete | WizardStep::NotYourDecision => &[Restart],
        }
    }

    /// Returns true if the step accepts the given kind of action.
    pub fn accepts(&self, kind: ActionKind) -> bool {
        self.accepted_actions().contains(&kind)
    }
}

/// Forward edges of the wizard. Restart is a reset to a fresh session,
/// not an edge, so terminal steps have no outgoing transitions.
impl StateMachine for WizardStep {
    fn valid_transitions(&self) -> Vec<Self> {
        use WizardStep::*;
        match self {
            OwnershipCheck => vec![DomainCollection, NotYourDecision],
            DomainCollection => vec![OptionCollection],
            OptionCollection => vec![DealbreakerCheck],
            DealbreakerCheck => vec![DealbreakerScreen, Scoring],
            DealbreakerScreen => vec![Scoring],
            Scoring => vec![Results],
            Results => vec![Complete, DomainCollection],
            Complete | NotYourDecision => vec![],
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title(), self.id())
    }
}
