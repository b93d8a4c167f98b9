//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::BrevisApiService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service (which owns the summary store).
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Summarization and store service
  ///
  /// - Production: `Arc::new(BrevisApiServiceFull::new(&config)?)`
  /// - Test: `Arc::new(BrevisApiServiceFull::with_backend(&config, stub))`
  pub service: Arc<dyn BrevisApiService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn BrevisApiService>) -> Self {
    Self { config, service }
  }
}
