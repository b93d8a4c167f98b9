//! モデルモジュール

mod request;
mod response;

pub use request::{SaveSummaryRequest, SummarizeRequest};
pub use response::{MessageResponse, SummarizeResponse};
