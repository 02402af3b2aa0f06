//! Wizard configuration

use serde::Deserialize;

use crate::domain::foundation::Rating;
use crate::domain::wizard::{WizardSettings, DEFAULT_REQUIRED_DOMAINS};

use super::error::ValidationError;

/// Upper bound on the configurable domain count.
pub const MAX_REQUIRED_DOMAINS: usize = 10;

/// Wizard tunables
#[derive(Debug, Clone, Deserialize)]
pub struct WizardConfig {
    /// Number of domains the user must name before listing options
    #[serde(default = "default_required_domains")]
    pub required_domains: usize,

    /// Rating seeded for each domain when an option is added
    #[serde(default = "default_rating")]
    pub default_rating: i64,
}

impl WizardConfig {
    /// Validate wizard configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.required_domains == 0 || self.required_domains > MAX_REQUIRED_DOMAINS {
            return Err(ValidationError::InvalidDomainCount {
                max: MAX_REQUIRED_DOMAINS,
                actual: self.required_domains,
            });
        }
        Rating::try_new(self.default_rating)
            .map_err(|_| ValidationError::InvalidDefaultRating(self.default_rating))?;
        Ok(())
    }

    /// Converts to session settings.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the values are out of range.
    pub fn to_settings(&self) -> Result<WizardSettings, ValidationError> {
        self.validate()?;
        let default_rating = Rating::try_new(self.default_rating)
            .map_err(|_| ValidationError::InvalidDefaultRating(self.default_rating))?;
        Ok(WizardSettings {
            required_domains: self.required_domains,
            default_rating,
        })
    }
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            required_domains: default_required_domains(),
            default_rating: default_rating(),
        }
    }
}

fn default_required_domains() -> usize {
    DEFAULT_REQUIRED_DOMAINS
}

fn default_rating() -> i64 {
    i64::from(Rating::MIDPOINT.value())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_session_defaults() {
        let settings = WizardConfig::default().to_settings().unwrap();
        assert_eq!(settings, WizardSettings::default());
    }

    #[test]
    fn zero_domains_is_invalid() {
        let config = WizardConfig {
            required_domains: 0,
            ..WizardConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidDomainCount { max: 10, actual: 0 })
        );
    }

    #[test]
    fn out_of_scale_default_rating_is_invalid() {
        let config = WizardConfig {
            default_rating: 11,
            ..WizardConfig::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidDefaultRating(11)));
        assert!(config.to_settings().is_err());
    }
}
