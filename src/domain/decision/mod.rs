//! Decision entities - the weighted domains and the options judged against them.
//!
//! Both entities are owned by the wizard session and read by the scoring
//! engine. Names are trimmed on creation and must not be empty.

mod criterion;
mod option;

pub use criterion::Domain;
pub use option::DecisionOption;

use crate::domain::foundation::ValidationError;

/// Trims a user-submitted name, rejecting it if nothing is left.
pub(crate) fn normalize_name(raw: &str, field: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(ValidationError::empty_field(field))
    } else {
        Ok(trimmed.to_string())
    }
}
