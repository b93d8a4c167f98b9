//! Config loading from environment variables

use std::time::Duration;

use brevis::config::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, UpstreamConfig};

use super::constants::{
  DEFAULT_BIND_HOST, DEFAULT_PORT, ENV_BIND_HOST, ENV_GEMINI_API_KEY, ENV_GEMINI_BASE_URL,
  ENV_GEMINI_MODEL, ENV_GEMINI_TIMEOUT_SECS, ENV_PORT,
};
use crate::errors::ApiError;

/// API Server Configuration
#[derive(Clone)]
pub struct Config {
  /// Bind address (e.g. "0.0.0.0:10000")
  pub bind_addr: String,
  /// Gemini credential. `None` is not a startup error; summarize requests fail with 400 instead.
  pub api_key: Option<String>,
  /// Upstream endpoint settings
  pub upstream: UpstreamConfig,
}

impl std::fmt::Debug for Config {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Config")
      .field("bind_addr", &self.bind_addr)
      .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
      .field("upstream", &self.upstream)
      .finish()
  }
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through an arbitrary variable lookup
  ///
  /// Empty values are treated as unset.
  ///
  /// # Errors
  /// Returns an error if `PORT` or `GEMINI_TIMEOUT_SECS` cannot be parsed
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

    let port = match get(ENV_PORT) {
      Some(raw) => raw
        .parse::<u16>()
        .map_err(|e| ApiError::config(format!("{ENV_PORT} is not a valid port: {raw} ({e})")))?,
      None => DEFAULT_PORT,
    };
    let host = get(ENV_BIND_HOST).unwrap_or_else(|| DEFAULT_BIND_HOST.to_string());

    let timeout = match get(ENV_GEMINI_TIMEOUT_SECS) {
      Some(raw) => {
        let secs = raw.parse::<u64>().map_err(|e| {
          ApiError::config(format!("{ENV_GEMINI_TIMEOUT_SECS} is not a number: {raw} ({e})"))
        })?;
        Some(Duration::from_secs(secs))
      }
      None => None,
    };

    let upstream = UpstreamConfig {
      base_url: get(ENV_GEMINI_BASE_URL).unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
      model: get(ENV_GEMINI_MODEL).unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
      timeout,
    };

    Ok(Self {
      bind_addr: format!("{host}:{port}"),
      api_key: get(ENV_GEMINI_API_KEY),
      upstream,
    })
  }
}
