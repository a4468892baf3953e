//! Seed configuration
//!
//! Callers that build generators from configuration files describe where the
//! seed comes from with a tagged [`SeedConfig`].

use serde::{Deserialize, Serialize};

use crate::core::clock::{seed_from_clock, Clock};
use crate::error::RandomError;

/// Where a generator gets its 32-bit working seed
///
/// # Example
/// ```
/// use stable_random::SeedConfig;
///
/// let config = SeedConfig::from_json(r#"{"type": "Fixed", "seed": 42}"#).unwrap();
/// assert_eq!(config, SeedConfig::Fixed { seed: 42 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SeedConfig {
    /// Always seed with the given value
    Fixed { seed: u32 },

    /// Derive the seed from the clock at construction time
    #[default]
    Clock,
}

impl SeedConfig {
    /// Parse a seed configuration from JSON
    pub fn from_json(json: &str) -> Result<Self, RandomError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve this configuration to a concrete seed
    pub fn resolve<C: Clock + ?Sized>(&self, clock: &C) -> u32 {
        match self {
            SeedConfig::Fixed { seed } => *seed,
            SeedConfig::Clock => seed_from_clock(clock),
        }
    }
}

impl From<Option<u32>> for SeedConfig {
    fn from(seed: Option<u32>) -> Self {
        match seed {
            Some(seed) => SeedConfig::Fixed { seed },
            None => SeedConfig::Clock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use std::time::Duration;

    #[test]
    fn test_parse_clock_config() {
        let config = SeedConfig::from_json(r#"{"type": "Clock"}"#).unwrap();
        assert_eq!(config, SeedConfig::Clock);
    }

    #[test]
    fn test_parse_rejects_unknown_type() {
        let result = SeedConfig::from_json(r#"{"type": "Entropy"}"#);
        assert!(matches!(result, Err(RandomError::Serialization(_))));
    }

    #[test]
    fn test_resolve() {
        let clock = FixedClock::new(Duration::from_secs(10));
        assert_eq!(SeedConfig::Fixed { seed: 7 }.resolve(&clock), 7);
        assert_eq!(SeedConfig::Clock.resolve(&clock), 2560);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(SeedConfig::from(Some(3)), SeedConfig::Fixed { seed: 3 });
        assert_eq!(SeedConfig::from(None), SeedConfig::Clock);
    }
}
