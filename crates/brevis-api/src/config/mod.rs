//! Config module

mod constants;
mod env;

pub use constants::{
  DEFAULT_BIND_HOST, DEFAULT_PORT, ENV_BIND_HOST, ENV_GEMINI_API_KEY, ENV_GEMINI_BASE_URL,
  ENV_GEMINI_MODEL, ENV_GEMINI_TIMEOUT_SECS, ENV_PORT,
};
pub use env::Config;
