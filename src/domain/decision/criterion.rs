//! Domain entity - a weighted criterion such as "Salary" or "Growth".

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Importance, ValidationError};

use super::normalize_name;

/// A criterion the user cares about, with an importance weight.
///
/// # Invariants
///
/// - `name` is trimmed and non-empty
/// - `importance` is within 1..=10
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    name: String,
    importance: Importance,
}

impl Domain {
    /// Creates a domain with the given importance.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank after trimming
    pub fn new(name: &str, importance: Importance) -> Result<Self, ValidationError> {
        Ok(Self {
            name: normalize_name(name, "domain_name")?,
            importance,
        })
    }

    /// Creates a domain seeded at the slider midpoint.
    pub fn with_default_importance(name: &str) -> Result<Self, ValidationError> {
        Self::new(name, Importance::MIDPOINT)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn importance(&self) -> Importance {
        self.importance
    }

    /// Updates the importance weight. Returns the previous value.
    pub fn set_importance(&mut self, importance: Importance) -> Importance {
        std::mem::replace(&mut self.importance, importance)
    }
}
