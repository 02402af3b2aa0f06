//! State machine trait for step and status enums.

use super::ValidationError;

/// Trait for enums whose values form a directed transition graph.
///
/// Implementors list their outgoing edges; validated transitions and
/// terminal detection come for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for WizardStep {
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             OwnershipCheck => vec![DomainCollection, NotYourDecision],
///             // ... etc
///         }
///     }
/// }
///
/// let next = WizardStep::OwnershipCheck.transition_to(WizardStep::DomainCollection)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
