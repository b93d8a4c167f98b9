//! models module
pub mod model_definition;

pub use model_definition::{NewSummary, SummaryRecord};
