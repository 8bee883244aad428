// Configuration resolution for the Pokemon API client
//
// Design Decision: Environment variables with literal defaults, resolved once
//
// Each resolution reads the environment exactly once and produces an
// immutable Settings value. The composition root resolves settings on every
// build, so two builds with different overrides never share a decision.
//
// Environment Variables (all optional):
// - APP_ENV: develop | test | production (default: develop)
// - POKEMON_API_URL: endpoint to GET (default: https://pokeapi.co/api/v2/pokemon)
// - REQUEST_TIMEOUT: request timeout in seconds (default: 5)

use crate::error::{PokedexError, Result};
use std::fmt;
use std::time::Duration;

pub const APP_ENV_VAR: &str = "APP_ENV";
pub const API_URL_VAR: &str = "POKEMON_API_URL";
pub const TIMEOUT_VAR: &str = "REQUEST_TIMEOUT";

pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2/pokemon";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Environment selector deciding which client gets bound
///
/// Only `Test` binds the fixture client. Unknown names are kept verbatim
/// in `Other` and behave like any non-test environment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppEnv {
    #[default]
    Develop,
    Test,
    Production,
    Other(String),
}

impl AppEnv {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "develop" => AppEnv::Develop,
            "test" => AppEnv::Test,
            "production" => AppEnv::Production,
            _ => AppEnv::Other(value.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AppEnv::Develop => "develop",
            AppEnv::Test => "test",
            AppEnv::Production => "production",
            AppEnv::Other(name) => name,
        }
    }

    pub fn uses_fixture(&self) -> bool {
        matches!(self, AppEnv::Test)
    }
}

impl fmt::Display for AppEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection parameters for the network-backed client
///
/// Fixed at construction; the client never mutates them.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Fully resolved settings for one composition-root invocation
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Settings {
    pub env: AppEnv,
    pub client: ClientConfig,
}

impl Settings {
    /// Resolve settings from the process environment
    ///
    /// An explicit `env_override` takes precedence over APP_ENV.
    ///
    /// # Errors
    /// - REQUEST_TIMEOUT is not a positive number of seconds
    /// - A variable is set but not valid unicode
    pub fn resolve(env_override: Option<&str>) -> Result<Self> {
        Self::from_lookup(env_override, |key| match std::env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => Err(PokedexError::EnvError(format!(
                "{} is not valid unicode",
                key
            ))),
        })
    }

    /// Resolve settings against an arbitrary key lookup
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(env_override: Option<&str>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Result<Option<String>>,
    {
        let read = |key: &str| -> Result<Option<String>> {
            Ok(lookup(key)?.filter(|value| !value.trim().is_empty()))
        };

        let env = match env_override {
            Some(name) => AppEnv::parse(name),
            None => read(APP_ENV_VAR)?
                .map(|name| AppEnv::parse(&name))
                .unwrap_or_default(),
        };

        let api_url = read(API_URL_VAR)?.unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout = match read(TIMEOUT_VAR)? {
            Some(raw) => parse_timeout(&raw)?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            env,
            client: ClientConfig { api_url, timeout },
        })
    }
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    let secs: f64 = raw.trim().parse().map_err(|_| {
        PokedexError::ConfigError(format!("{} must be a number of seconds, got '{}'", TIMEOUT_VAR, raw))
    })?;

    if !secs.is_finite() || secs <= 0.0 {
        return Err(PokedexError::ConfigError(format!(
            "{} must be greater than zero, got '{}'",
            TIMEOUT_VAR, raw
        )));
    }

    let timeout = Duration::try_from_secs_f64(secs).map_err(|_| {
        PokedexError::ConfigError(format!("{} is out of range, got '{}'", TIMEOUT_VAR, raw))
    })?;

    // Sub-nanosecond values round down to zero
    if timeout.is_zero() {
        return Err(PokedexError::ConfigError(format!(
            "{} must be greater than zero, got '{}'",
            TIMEOUT_VAR, raw
        )));
    }

    Ok(timeout)
}
