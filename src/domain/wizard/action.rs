//! User actions the presentation layer can submit to the wizard.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the user feels about the top-ranked option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feeling {
    Great,
    NotGreat,
}

impl fmt::Display for Feeling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Feeling::Great => "great",
            Feeling::NotGreat => "not-great",
        };
        write!(f, "{}", s)
    }
}

/// One discrete user input, with its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WizardAction {
    AnswerOwnership { is_own: bool },
    AddDomain { name: String },
    /// Slider value; clamped into 1..=10 when applied.
    SetDomainImportance { domain: String, value: i64 },
    AdvanceFromDomains,
    AddOption { name: String },
    AdvanceFromOptions,
    AnswerHasDealbreakers { has_dealbreakers: bool },
    AnswerOptionsViolateDealbreakers { violated: bool },
    /// Slider value; clamped into 1..=10 when applied.
    SetOptionScore { option: String, domain: String, value: i64 },
    CalculateResults,
    AnswerFeeling { feeling: Feeling },
    Restart,
}

impl WizardAction {
    /// Returns the payload-free kind of this action.
    pub fn kind(&self) -> ActionKind {
        match self {
            WizardAction::AnswerOwnership { .. } => ActionKind::AnswerOwnership,
            WizardAction::AddDomain { .. } => ActionKind::AddDomain,
            WizardAction::SetDomainImportance { .. } => ActionKind::SetDomainImportance,
            WizardAction::AdvanceFromDomains => ActionKind::AdvanceFromDomains,
            WizardAction::AddOption { .. } => ActionKind::AddOption,
            WizardAction::AdvanceFromOptions => ActionKind::AdvanceFromOptions,
            WizardAction::AnswerHasDealbreakers { .. } => ActionKind::AnswerHasDealbreakers,
            WizardAction::AnswerOptionsViolateDealbreakers { .. } => {
                ActionKind::AnswerOptionsViolateDealbreakers
            }
            WizardAction::SetOptionScore { .. } => ActionKind::SetOptionScore,
            WizardAction::CalculateResults => ActionKind::CalculateResults,
            WizardAction::AnswerFeeling { .. } => ActionKind::AnswerFeeling,
            WizardAction::Restart => ActionKind::Restart,
        }
    }
}

/// Action discriminant, used to describe which controls are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    AnswerOwnership,
    AddDomain,
    SetDomainImportance,
    AdvanceFromDomains,
    AddOption,
    AdvanceFromOptions,
    AnswerHasDealbreakers,
    AnswerOptionsViolateDealbreakers,
    SetOptionScore,
    CalculateResults,
    AnswerFeeling,
    Restart,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActionKind::AnswerOwnership => "answer_ownership",
            ActionKind::AddDomain => "add_domain",
            ActionKind::SetDomainImportance => "set_domain_importance",
            ActionKind::AdvanceFromDomains => "advance_from_domains",
            ActionKind::AddOption => "add_option",
            ActionKind::AdvanceFromOptions => "advance_from_options",
            ActionKind::AnswerHasDealbreakers => "answer_has_dealbreakers",
            ActionKind::AnswerOptionsViolateDealbreakers => "answer_options_violate_dealbreakers",
            ActionKind::SetOptionScore => "set_option_score",
            ActionKind::CalculateResults => "calculate_results",
            ActionKind::AnswerFeeling => "answer_feeling",
            ActionKind::Restart => "restart",
        };
        write!(f, "{}", s)
    }
}
