use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use crate::extract::MissingCellPolicy;

pub const LEADERBOARD_URL: &str =
    "https://www.basketball-reference.com/leaders/most_championships.html";
pub const OUTPUT_FILE: &str = "championship_players.csv";
const ENV_PREFIX: &str = "CHAMPS";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Run settings: built-in defaults, then `CHAMPS_*` environment variables.
/// Command-line flags are layered on top by the binary.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub url: String,
    pub output: PathBuf,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub skip_incomplete: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            url: LEADERBOARD_URL.to_string(),
            output: PathBuf::from(OUTPUT_FILE),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            skip_incomplete: false,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_env(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_env(env: Environment) -> Result<Self, ConfigError> {
        let defaults = Settings::default();
        let settings: Settings = Config::builder()
            .set_default("url", defaults.url)?
            .set_default("output", defaults.output.to_string_lossy().into_owned())?
            .set_default("timeout_secs", defaults.timeout_secs as i64)?
            .set_default("user_agent", defaults.user_agent)?
            .set_default("skip_incomplete", defaults.skip_incomplete)?
            .add_source(env)
            .build()?
            .try_deserialize()?;
        if settings.timeout_secs == 0 {
            return Err(ConfigError::Message("timeout_secs must be at least 1".into()));
        }
        Ok(settings)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn missing_cell_policy(&self) -> MissingCellPolicy {
        if self.skip_incomplete {
            MissingCellPolicy::Skip
        } else {
            MissingCellPolicy::Abort
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let mut map = config::Map::new();
        for (k, v) in vars {
            map.insert(k.to_string(), v.to_string());
        }
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn defaults_without_env() {
        let s = Settings::from_env(env(&[])).unwrap();
        assert_eq!(s.url, LEADERBOARD_URL);
        assert_eq!(s.output, PathBuf::from(OUTPUT_FILE));
        assert_eq!(s.timeout(), Duration::from_secs(30));
        assert_eq!(s.missing_cell_policy(), MissingCellPolicy::Abort);
    }

    #[test]
    fn env_overrides_defaults() {
        let s = Settings::from_env(env(&[
            ("CHAMPS_URL", "http://localhost:8080/page.html"),
            ("CHAMPS_OUTPUT", "out/players.csv"),
            ("CHAMPS_TIMEOUT_SECS", "5"),
            ("CHAMPS_SKIP_INCOMPLETE", "true"),
        ]))
        .unwrap();
        assert_eq!(s.url, "http://localhost:8080/page.html");
        assert_eq!(s.output, PathBuf::from("out/players.csv"));
        assert_eq!(s.timeout_secs, 5);
        assert_eq!(s.missing_cell_policy(), MissingCellPolicy::Skip);
        assert_eq!(s.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn rejects_non_numeric_timeout() {
        let err = Settings::from_env(env(&[("CHAMPS_TIMEOUT_SECS", "soon")]));
        assert!(err.is_err());
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = Settings::from_env(env(&[("CHAMPS_TIMEOUT_SECS", "0")]));
        assert!(err.is_err());
    }
}
