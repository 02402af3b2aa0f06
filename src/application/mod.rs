//! Application layer - the controller the presentation layer drives.
//!
//! The presentation layer reads [`WizardSnapshot`](crate::domain::wizard::WizardSnapshot)s
//! and calls controller operations; it never touches session state directly.

mod wizard_controller;

pub use wizard_controller::WizardController;
