//! Summary prompt template.

/// Instruction placed in front of the article text.
pub const SUMMARY_INSTRUCTION: &str = "Summarize the following in 3 concise bullet points:";

/// Builds the single-turn summarization prompt for already-cleaned text.
#[must_use]
pub fn build_summary_prompt(clean_text: &str) -> String {
  format!("{SUMMARY_INSTRUCTION}\n\n{clean_text}")
}
