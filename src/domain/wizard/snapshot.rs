//! Read-only view of a wizard session for the presentation layer.

use serde::{Deserialize, Serialize};

use crate::domain::decision::{DecisionOption, Domain};
use crate::domain::foundation::SessionId;

use super::{ActionKind, Feeling, WizardSession, WizardStep};

/// Everything a screen needs to render, detached from the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardSnapshot {
    pub session_id: SessionId,
    pub step: WizardStep,
    pub step_id: u8,
    pub title: String,
    pub prompt: String,
    pub is_own_decision: Option<bool>,
    pub domains: Vec<Domain>,
    pub options: Vec<DecisionOption>,
    pub has_dealbreakers: Option<bool>,
    pub options_violate_dealbreakers: Option<bool>,
    pub feeling: Option<Feeling>,
    /// Controls that are currently enabled.
    pub legal_actions: Vec<ActionKind>,
}

impl WizardSnapshot {
    pub(crate) fn of(session: &WizardSession) -> Self {
        let step = session.step();
        Self {
            session_id: *session.id(),
            step,
            step_id: step.id(),
            title: step.title().to_string(),
            prompt: step.prompt(session.settings().required_domains),
            is_own_decision: session.is_own_decision(),
            domains: session.domains().to_vec(),
            options: session.options().to_vec(),
            has_dealbreakers: session.has_dealbreakers(),
            options_violate_dealbreakers: session.options_violate_dealbreakers(),
            feeling: session.feeling(),
            legal_actions: session.legal_actions(),
        }
    }

    /// Returns true if the given control is enabled.
    pub fn allows(&self, kind: ActionKind) -> bool {
        self.legal_actions.contains(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::wizard::WizardAction;

    #[test]
    fn snapshot_of_fresh_session() {
        let session = WizardSession::default();
        let snapshot = session.snapshot();

        assert_eq!(snapshot.step_id, 0);
        assert_eq!(snapshot.title, "Ownership Check");
        assert!(snapshot.allows(ActionKind::AnswerOwnership));
        assert!(!snapshot.allows(ActionKind::AddDomain));
    }

    #[test]
    fn snapshot_serializes_for_rendering() {
        let mut session = WizardSession::default();
        session.apply(WizardAction::AnswerOwnership { is_own: true });
        session.apply(WizardAction::AddDomain { name: "Salary".to_string() });

        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["step"], "domain_collection");
        assert_eq!(json["step_id"], 1);
        assert_eq!(json["prompt"], "What are the 3 most important things to you?");
        assert_eq!(json["domains"][0]["name"], "Salary");
        assert_eq!(json["domains"][0]["importance"], 5);
    }
}
