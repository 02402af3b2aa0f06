//! Decision Wizard - the step-by-step flow from "is this yours to decide?"
//! to a ranked list of options.
//!
//! # Structure
//!
//! - `WizardStep` - the nine screens and their legal edges
//! - `WizardAction` - every input the presentation layer can submit
//! - `transition` - the pure (step, action) table with its guards
//! - `WizardSession` - the aggregate that owns and mutates all state
//!
//! The presentation layer only reads [`WizardSnapshot`]s and submits
//! actions; it never mutates session fields directly.

mod action;
mod errors;
mod events;
mod session;
mod snapshot;
mod step;
pub mod transition;

pub use action::{ActionKind, Feeling, WizardAction};
pub use errors::WizardError;
pub use events::{DomainAdded, OptionAdded, StepChanged, WizardEvent, WizardRestarted};
pub use session::{Outcome, WizardSession, WizardSettings, DEFAULT_REQUIRED_DOMAINS};
pub use snapshot::WizardSnapshot;
pub use step::WizardStep;
pub use transition::{Rejection, Transition, TransitionGuards};
