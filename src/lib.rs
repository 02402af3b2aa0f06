//! Decision Anatomy - Guided Decision Wizard
//!
//! This crate walks a user through a structured decision: confirming the
//! decision is theirs, naming and weighting what matters, listing options,
//! screening dealbreakers, rating each option, and ranking them by weighted
//! score.
//!
//! The presentation layer drives a single
//! [`WizardController`](application::WizardController) and renders the
//! snapshots it returns.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
