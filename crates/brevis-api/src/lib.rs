//! brevis-api crate
//!
//! Web server relaying article summarization to Gemini and keeping saved summaries in memory.
//!
//! ## Endpoints
//! - `POST /api/summarize` - Summarize text
//! - `POST /api/save-summary` - Save a summary record
//! - `GET /api/summaries` - List saved summary records
//! - `GET /` - Liveness
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:10000/api/summarize \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "<p>Article body</p>"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{MessageResponse, SaveSummaryRequest, SummarizeRequest, SummarizeResponse};
pub use service::BrevisApiServiceFull;
