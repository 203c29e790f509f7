//! Pipeline Configuration
//!
//! Settings are sourced from environment variables once at process start and
//! are immutable afterwards. Any missing or invalid variable fails startup
//! before an alert is processed.

use config::{Config, ConfigError};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Configuration errors, fatal at startup
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },

    #[error("configuration source error: {0}")]
    Source(#[from] ConfigError),
}

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Test,
    Prod,
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Environment::Dev),
            "test" => Ok(Environment::Test),
            "prod" => Ok(Environment::Prod),
            other => Err(format!("{other:?} is not one of: dev, test, prod")),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Environment::Dev => "dev",
            Environment::Test => "test",
            Environment::Prod => "prod",
        })
    }
}

/// Application settings
///
/// Required variables: `APP_ENV`, `DATABASE_URL`, `API_TOKEN`.
#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,
    pub database_url: String,
    pub api_token: String,
}

impl Settings {
    /// Load settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::load(config::Environment::default())
    }

    /// Load settings from an explicit environment source.
    ///
    /// Tests inject a `config::Environment` with a fixed variable map.
    pub fn load(source: config::Environment) -> Result<Self, SettingsError> {
        let cfg = Config::builder().add_source(source).build()?;

        let env_raw = require(&cfg, "app_env", "APP_ENV")?;
        let env = env_raw
            .parse::<Environment>()
            .map_err(|reason| SettingsError::Invalid {
                var: "APP_ENV",
                reason,
            })?;

        let database_url = require(&cfg, "database_url", "DATABASE_URL")?;
        if database_url.trim().is_empty() {
            return Err(SettingsError::Invalid {
                var: "DATABASE_URL",
                reason: "must not be empty".to_string(),
            });
        }
        if !database_url.ends_with(".db") {
            return Err(SettingsError::Invalid {
                var: "DATABASE_URL",
                reason: "must point at a .db resource".to_string(),
            });
        }

        let api_token = require(&cfg, "api_token", "API_TOKEN")?;
        if api_token.trim().is_empty() {
            return Err(SettingsError::Invalid {
                var: "API_TOKEN",
                reason: "must not be empty".to_string(),
            });
        }

        Ok(Self {
            env,
            database_url,
            api_token,
        })
    }
}

fn require(cfg: &Config, key: &str, var: &'static str) -> Result<String, SettingsError> {
    match cfg.get_string(key) {
        Ok(value) => Ok(value),
        Err(ConfigError::NotFound(_)) => Err(SettingsError::MissingVar(var)),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(vars: &[(&str, &str)]) -> config::Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::default().source(Some(map))
    }

    fn full() -> Vec<(&'static str, &'static str)> {
        vec![
            ("APP_ENV", "dev"),
            ("DATABASE_URL", "alerts.db"),
            ("API_TOKEN", "secret-token"),
        ]
    }

    #[test]
    fn test_loads_complete_environment() {
        let settings = Settings::load(source(&full())).unwrap();
        assert_eq!(settings.env, Environment::Dev);
        assert_eq!(settings.database_url, "alerts.db");
        assert_eq!(settings.api_token, "secret-token");
    }

    #[test]
    fn test_all_environments_parse() {
        for (raw, expected) in [
            ("dev", Environment::Dev),
            ("test", Environment::Test),
            ("prod", Environment::Prod),
        ] {
            let mut vars = full();
            vars[0] = ("APP_ENV", raw);
            assert_eq!(Settings::load(source(&vars)).unwrap().env, expected);
        }
    }

    #[test]
    fn test_missing_variables_fail_fast() {
        for missing in ["APP_ENV", "DATABASE_URL", "API_TOKEN"] {
            let vars: Vec<_> = full().into_iter().filter(|(k, _)| *k != missing).collect();
            match Settings::load(source(&vars)) {
                Err(SettingsError::MissingVar(var)) => assert_eq!(var, missing),
                other => panic!("expected missing {missing}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_unknown_environment_rejected() {
        let mut vars = full();
        vars[0] = ("APP_ENV", "staging");
        assert!(matches!(
            Settings::load(source(&vars)),
            Err(SettingsError::Invalid { var: "APP_ENV", .. })
        ));
    }

    #[test]
    fn test_database_url_must_be_db_file() {
        for bad in ["", "   ", "alerts.sqlite", "postgres://alerts"] {
            let mut vars = full();
            vars[1] = ("DATABASE_URL", bad);
            assert!(matches!(
                Settings::load(source(&vars)),
                Err(SettingsError::Invalid {
                    var: "DATABASE_URL",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_api_token_must_not_be_empty() {
        let mut vars = full();
        vars[2] = ("API_TOKEN", "  ");
        assert!(matches!(
            Settings::load(source(&vars)),
            Err(SettingsError::Invalid {
                var: "API_TOKEN",
                ..
            })
        ));
    }
}
