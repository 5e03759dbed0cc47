use crate::error::{Error, Result};
use dotenvy::dotenv;
use log::{debug, info};
use std::{env as stdenv, fmt, str::FromStr};

pub const SECRET_KEY_VAR: &str = "CHARGILY_SECRET_KEY";
pub const MODE_VAR: &str = "CHARGILY_MODE";

const LIVE_BASE_URL: &str = "https://pay.chargily.net/api/v2";
const TEST_BASE_URL: &str = "https://pay.chargily.net/test/api/v2";

/// Which Chargily environment the credentials belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Test,
    Live,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Test => "test",
            Mode::Live => "live",
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Mode::Live)
    }

    /// Guesses the mode from a `live_sk_...` / `test_sk_...` key.
    pub fn from_key(api_key: &str) -> Self {
        if api_key.starts_with("live_") {
            Mode::Live
        } else {
            Mode::Test
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "test" => Ok(Mode::Test),
            "live" => Ok(Mode::Live),
            other => Err(Error::Config(format!(
                "{} must be `test` or `live`, got `{}`",
                MODE_VAR, other
            ))),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Credentials and environment for talking to Chargily Pay.
///
/// The transport layer owns the HTTP client; this only carries what it needs
/// to address the API.
#[derive(Clone, PartialEq, Eq)]
pub struct ChargilyClient {
    pub api_key: String,
    pub mode: Mode,
}

impl ChargilyClient {
    pub fn new(api_key: impl Into<String>, mode: Mode) -> Self {
        Self {
            api_key: api_key.into(),
            mode,
        }
    }

    /// Reads `CHARGILY_SECRET_KEY` and `CHARGILY_MODE`, loading `.env` first
    /// when one exists.
    pub fn from_env() -> Result<Self> {
        match dotenv() {
            Ok(path) => debug!(".env loaded from {}", path.display()),
            Err(err) => debug!(".env not loaded: {}", err),
        }
        Self::from_vars(
            stdenv::var(SECRET_KEY_VAR).ok(),
            stdenv::var(MODE_VAR).ok(),
        )
    }

    /// Builds a client from already-read variable values.
    pub fn from_vars(api_key: Option<String>, mode: Option<String>) -> Result<Self> {
        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::Config(format!("{} not set", SECRET_KEY_VAR)))?;
        let mode = match mode.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => raw.parse()?,
            _ => Mode::from_key(&api_key),
        };
        info!("chargily client configured in {} mode", mode);
        Ok(Self { api_key, mode })
    }

    pub fn base_url(&self) -> &'static str {
        match self.mode {
            Mode::Test => TEST_BASE_URL,
            Mode::Live => LIVE_BASE_URL,
        }
    }
}

impl fmt::Debug for ChargilyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChargilyClient")
            .field("api_key", &"<redacted>")
            .field("mode", &self.mode)
            .finish()
    }
}
