//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::num::ParseIntError;

/// Environment variable holding a fixed particle seed
pub const PARTICLE_SEED_VAR: &str = "KAYDIO_PARTICLE_SEED";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be an unsigned integer, got {value:?}")]
    InvalidSeed {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Seed shared with the client so every generated effect is reproducible.
    /// Unset means the client picks its own seed.
    pub particle_seed: Option<u64>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Invalid values are logged and ignored.
    pub fn from_env() -> Self {
        Self {
            particle_seed: seed_from_var(std::env::var(PARTICLE_SEED_VAR).ok()),
        }
    }

    /// Check if a fixed particle seed is configured
    pub fn has_particle_seed(&self) -> bool {
        self.particle_seed.is_some()
    }
}

/// Seed from the raw variable; unset or unparsable means none
fn seed_from_var(raw: Option<String>) -> Option<u64> {
    match parse_seed(&raw?) {
        Ok(seed) => Some(seed),
        Err(e) => {
            tracing::warn!("Ignoring configuration: {}", e);
            None
        }
    }
}

/// Parse a seed value, trimming surrounding whitespace
pub fn parse_seed(raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|source| ConfigError::InvalidSeed {
            var: PARTICLE_SEED_VAR,
            value: raw.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed("42").unwrap(), 42);
        assert_eq!(parse_seed("  7 \n").unwrap(), 7);
        assert_eq!(parse_seed("18446744073709551615").unwrap(), u64::MAX);
    }

    #[test]
    fn test_parse_seed_rejects_garbage() {
        for raw in ["", "-1", "abc", "1.5"] {
            let err = parse_seed(raw).unwrap_err();
            assert!(err.to_string().contains(PARTICLE_SEED_VAR), "{}", err);
        }
    }

    #[test]
    fn test_error_keeps_source() {
        use std::error::Error;

        let err = parse_seed("x").unwrap_err();
        assert!(err.source().is_some());
    }

    #[test]
    fn test_has_particle_seed() {
        let with = Config {
            particle_seed: Some(1),
        };
        let without = Config::default();

        assert!(with.has_particle_seed());
        assert!(!without.has_particle_seed());
    }

    #[test]
    fn test_seed_from_var() {
        assert_eq!(seed_from_var(Some("1234".to_string())), Some(1234));
        assert_eq!(seed_from_var(Some(" 9 ".to_string())), Some(9));
        assert_eq!(seed_from_var(None), None);
    }

    #[test]
    fn test_seed_from_var_ignores_invalid_values() {
        for raw in ["", "seed", "-3", "99999999999999999999"] {
            assert_eq!(seed_from_var(Some(raw.to_string())), None, "{:?}", raw);
        }
    }
}
