//! Retention policy file

use crate::domain::{KeepTier, RetentionPolicy};
use crate::error::{Result, RotateError};
use serde::Deserialize;
use std::fs;
use std::num::NonZeroU32;
use std::path::Path;

/// Defaults loaded from a TOML file. Command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RotationConfig {
    pub keep_minutely: Option<NonZeroU32>,
    pub keep_hourly: Option<NonZeroU32>,
    pub keep_daily: Option<NonZeroU32>,
    pub keep_weekly: Option<NonZeroU32>,
    pub keep_monthly: Option<NonZeroU32>,
    pub newline: bool,
}

impl RotationConfig {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            RotateError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Keep counts from the file as a policy
    pub fn policy(&self) -> RetentionPolicy {
        let mut policy = RetentionPolicy::default();
        for tier in KeepTier::ALL {
            let count = match tier {
                KeepTier::Minutely => self.keep_minutely,
                KeepTier::Hourly => self.keep_hourly,
                KeepTier::Daily => self.keep_daily,
                KeepTier::Weekly => self.keep_weekly,
                KeepTier::Monthly => self.keep_monthly,
            };
            policy.set(tier, count);
        }
        policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_full_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("rotation.toml");
        fs::write(
            &path,
            "keep_hourly = 24\nkeep_daily = 7\nkeep_weekly = 4\nnewline = true\n",
        )
        .unwrap();

        let config = RotationConfig::load(&path).unwrap();
        assert!(config.newline);
        let policy = config.policy();
        assert_eq!(policy.hourly.map(NonZeroU32::get), Some(24));
        assert_eq!(policy.daily.map(NonZeroU32::get), Some(7));
        assert_eq!(policy.weekly.map(NonZeroU32::get), Some(4));
        assert_eq!(policy.minutely, None);
        assert_eq!(policy.monthly, None);
    }

    #[test]
    fn test_empty_config_is_default() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.toml");
        fs::write(&path, "").unwrap();

        let config = RotationConfig::load(&path).unwrap();
        assert_eq!(config, RotationConfig::default());
        assert_eq!(config.policy(), RetentionPolicy::default());
    }

    #[test]
    fn test_zero_keep_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("zero.toml");
        fs::write(&path, "keep_daily = 0\n").unwrap();

        let err = RotationConfig::load(&path).unwrap_err();
        assert!(matches!(err, RotateError::TomlDeserialize(_)));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("typo.toml");
        fs::write(&path, "keep_yearly = 3\n").unwrap();

        assert!(RotationConfig::load(&path).is_err());
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = RotationConfig::load(&temp.path().join("absent.toml")).unwrap_err();
        match err {
            RotateError::Config(msg) => assert!(msg.contains("absent.toml")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
