//! Upstream generative-text API (Gemini `generateContent`).

mod gemini_client;
mod wire;

pub use gemini_client::{GeminiClient, GenerationBackend};
pub use wire::{Content, GenerateContentRequest, Part, extract_summary};
