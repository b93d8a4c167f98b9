//! Service module

mod brevis_api_service;

pub use brevis_api_service::{BrevisApiService, BrevisApiServiceFull};
