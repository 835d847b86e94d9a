use std::env;
use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

use crate::replay::directory;

pub const RECORD_DIR_VAR: &str = "GAME_RECORD_DIR";
pub const RECORD_FLUSH_VAR: &str = "GAME_RECORD_FLUSH";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be one of true/false/1/0, got {value:?}")]
    InvalidBool { name: &'static str, value: String },
    #[error("{name} must not be empty")]
    Empty { name: &'static str },
}

/// Where game records go and how eagerly file sinks flush.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecorderConfig {
    pub replay_dir: PathBuf,
    pub flush_each_record: bool,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            replay_dir: directory::default_record_directory(),
            flush_each_record: true,
        }
    }
}

impl RecorderConfig {
    /// Load from the environment, reading a `.env` file first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let config = Self::from_lookup(|name| env::var(name).ok())?;
        info!(
            "Recording games to {:?} (flush each record: {})",
            config.replay_dir, config.flush_each_record
        );
        Ok(config)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(RECORD_DIR_VAR) {
            if dir.trim().is_empty() {
                return Err(ConfigError::Empty { name: RECORD_DIR_VAR });
            }
            config.replay_dir = PathBuf::from(dir);
        }

        if let Some(flush) = lookup(RECORD_FLUSH_VAR) {
            config.flush_each_record = parse_bool(RECORD_FLUSH_VAR, &flush)?;
        }

        Ok(config)
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidBool { name, value: value.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = RecorderConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, RecorderConfig::default());
        assert!(config.flush_each_record);
    }

    #[test]
    fn test_overrides() {
        let config = RecorderConfig::from_lookup(lookup(&[
            (RECORD_DIR_VAR, "/var/lib/records"),
            (RECORD_FLUSH_VAR, "FALSE"),
        ]))
        .unwrap();
        assert_eq!(config.replay_dir, PathBuf::from("/var/lib/records"));
        assert!(!config.flush_each_record);
    }

    #[test]
    fn test_invalid_values() {
        let err =
            RecorderConfig::from_lookup(lookup(&[(RECORD_FLUSH_VAR, "sometimes")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidBool { name: RECORD_FLUSH_VAR, value: "sometimes".to_string() }
        );

        let err = RecorderConfig::from_lookup(lookup(&[(RECORD_DIR_VAR, "  ")])).unwrap_err();
        assert_eq!(err.to_string(), "GAME_RECORD_DIR must not be empty");
    }
}
