//! Runtime configuration.
//!
//! | Variable                | Meaning                                   | Default            |
//! |-------------------------|-------------------------------------------|--------------------|
//! | `DRUD_HOME`             | Base directory of local projects          | `$HOME/.drud`      |
//! | `DRUD_PORT_ATTEMPTS`    | Attempts before giving up on a port       | `70`               |
//! | `DRUD_PORT_DELAY_SECS`  | Seconds between two failed port lookups   | `2`                |
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::watcher::RetryPolicy;

pub const HOME_VAR: &str = "DRUD_HOME";
pub const ATTEMPTS_VAR: &str = "DRUD_PORT_ATTEMPTS";
pub const DELAY_VAR: &str = "DRUD_PORT_DELAY_SECS";

/// Name of the base directory below the user's home directory.
const BASE_DIR_NAME: &str = ".drud";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not determine home directory, set `DRUD_HOME` explicitly")]
    MissingHomeDir,
    #[error("invalid value for `{key}`: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding one sub-directory per local project.
    pub base_dir: PathBuf,
    pub retry: RetryPolicy,
}

impl Config {
    /// Loads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingHomeDir`] if neither `DRUD_HOME` is set nor a home directory exists.
    /// - [`Error::InvalidValue`] if a numeric variable can't be parsed.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), dirs::home_dir())
    }

    /// Loads the configuration from an arbitrary variable lookup.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        home_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let base_dir = match lookup(HOME_VAR).filter(|value| !value.is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => home_dir.ok_or(Error::MissingHomeDir)?.join(BASE_DIR_NAME),
        };
        log::debug!("Base directory: {}", base_dir.display());

        let mut retry = RetryPolicy::default();
        if let Some(attempts) = parse_var::<u32>(&lookup, ATTEMPTS_VAR)? {
            retry = retry.with_max_attempts(attempts);
        }
        if let Some(secs) = parse_var::<u64>(&lookup, DELAY_VAR)? {
            retry = retry.with_delay(Duration::from_secs(secs));
        }

        Ok(Self { base_dir, retry })
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>> {
    let Some(value) = lookup(key) else {
        return Ok(None);
    };
    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| Error::InvalidValue { key, value })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[]), Some(PathBuf::from("/home/dev"))).unwrap();
        assert_eq!(config.base_dir, PathBuf::from("/home/dev/.drud"));
        assert_eq!(config.retry, RetryPolicy::default());
    }

    #[test]
    fn test_home_override() {
        let config =
            Config::from_lookup(lookup(&[(HOME_VAR, "/srv/sites")]), None).unwrap();
        assert_eq!(config.base_dir, PathBuf::from("/srv/sites"));
    }

    #[test]
    fn test_empty_home_override_is_ignored() {
        let config =
            Config::from_lookup(lookup(&[(HOME_VAR, "")]), Some(PathBuf::from("/home/dev")))
                .unwrap();
        assert_eq!(config.base_dir, PathBuf::from("/home/dev/.drud"));
    }

    #[test]
    fn test_missing_home_dir() {
        let err = Config::from_lookup(lookup(&[]), None).unwrap_err();
        assert!(matches!(err, Error::MissingHomeDir));
    }

    #[test]
    fn test_retry_overrides() {
        let config = Config::from_lookup(
            lookup(&[(ATTEMPTS_VAR, "5"), (DELAY_VAR, " 1 ")]),
            Some(PathBuf::from("/home/dev")),
        )
        .unwrap();
        assert_eq!(config.retry.max_attempts(), 5);
        assert_eq!(config.retry.delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_invalid_retry_value() {
        let err = Config::from_lookup(
            lookup(&[(ATTEMPTS_VAR, "many")]),
            Some(PathBuf::from("/home/dev")),
        )
        .unwrap_err();
        match err {
            Error::InvalidValue { key, value } => {
                assert_eq!(key, ATTEMPTS_VAR);
                assert_eq!(value, "many");
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
