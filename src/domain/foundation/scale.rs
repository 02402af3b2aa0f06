//! Scale value object for slider inputs (1 to 10).
//!
//! The same bounded scale backs both a domain's importance weight and an
//! option's per-domain rating, so both are exported as aliases.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Integer on the 1..=10 slider scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct ScaleValue(u8);

/// Importance weight of a decision domain.
pub type Importance = ScaleValue;

/// Rating an option receives for one domain.
pub type Rating = ScaleValue;

impl ScaleValue {
    /// Lowest value on the scale.
    pub const MIN: ScaleValue = ScaleValue(1);

    /// Highest value on the scale.
    pub const MAX: ScaleValue = ScaleValue(10);

    /// Slider midpoint, used to seed new domains and option ratings.
    pub const MIDPOINT: ScaleValue = ScaleValue(5);

    /// Creates a value, returning error if out of range.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if (Self::MIN.0 as i64..=Self::MAX.0 as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ValidationError::out_of_range(
                "scale_value",
                Self::MIN.0 as i64,
                Self::MAX.0 as i64,
                value,
            ))
        }
    }

    /// Creates a value, clamping anything outside the scale to the nearest bound.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN.0 as i64, Self::MAX.0 as i64) as u8)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for ScaleValue {
    fn default() -> Self {
        Self::MIDPOINT
    }
}

impl TryFrom<i64> for ScaleValue {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<ScaleValue> for u8 {
    fn from(value: ScaleValue) -> Self {
        value.0
    }
}

impl From<ScaleValue> for u32 {
    fn from(value: ScaleValue) -> Self {
        value.0 as u32
    }
}

impl fmt::Display for ScaleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
