//! Markup stripping.
//!
//! Removes every `<...>` run from the input. This is a textual filter, not an HTML parser:
//! there is no nesting awareness and entities such as `&amp;` are left as they are.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

fn compile_regex(pattern: &str) -> Regex {
  match Regex::new(pattern) {
    Ok(regex) => regex,
    Err(_compile_err) => match Regex::new(r"$^") {
      Ok(fallback) => fallback,
      Err(fallback_err) => panic!("hardcoded fallback regex must compile: {fallback_err}"),
    },
  }
}

static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| compile_regex(r"<[^>]*>"));

/// Removes all angle-bracket tags from `text`.
///
/// Returns the input unchanged (borrowed) when it contains no tags.
pub fn strip_markup(text: &str) -> Cow<'_, str> {
  TAG_REGEX.replace_all(text, "")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn strips_simple_tags() {
    assert_eq!(strip_markup("<b>Hi</b> there"), "Hi there");
  }

  #[test]
  fn strips_tags_with_attributes_and_newlines() {
    let html = "<p class=\"lead\"\n  id=\"x\">Body</p><br/>";
    assert_eq!(strip_markup(html), "Body");
  }

  #[test]
  fn leaves_entities_alone() {
    assert_eq!(strip_markup("<i>Fish &amp; chips</i>"), "Fish &amp; chips");
  }

  #[test]
  fn no_nesting_awareness() {
    // `<a <b> c>`: the first match ends at the first `>`.
    assert_eq!(strip_markup("x<a <b> c>y"), "x c>y");
  }

  #[test]
  fn unclosed_bracket_is_kept() {
    assert_eq!(strip_markup("1 < 2 and 3"), "1 < 2 and 3");
  }

  #[test]
  fn plain_text_is_borrowed() {
    assert!(matches!(strip_markup("plain text"), Cow::Borrowed("plain text")));
  }
}
