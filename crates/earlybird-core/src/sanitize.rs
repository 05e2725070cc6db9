//! Input sanitization for free-text form fields.
//!
//! A fixed denylist applied before validation and storage: angle brackets
//! and quotes are removed, ampersands escaped to their HTML entity, the
//! `javascript:` scheme, inline event-handler attributes (`on<word>=`),
//! and the substring `script` stripped case-insensitively, and the result
//! trimmed. Each rule is a single left-to-right pass over the input.
//!
//! The `script` rule is a blunt substring strip: it also mangles
//! legitimate words ("Scriptoria" becomes "oria").

use std::sync::LazyLock;

use regex::Regex;

// Compile-once patterns. The literals are fixed, so construction cannot
// fail at runtime.
#[allow(clippy::unwrap_used)]
static JAVASCRIPT_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)javascript:").unwrap());

#[allow(clippy::unwrap_used)]
static EVENT_HANDLER_ATTR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)on\w+=").unwrap());

#[allow(clippy::unwrap_used)]
static SCRIPT_SUBSTRING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)script").unwrap());

/// Sanitize free-text input.
///
/// Deterministic and total: never fails, always returns an owned string.
/// Ampersand escaping is a single-pass transform — sanitizing already
/// sanitized text doubles the escape, so apply exactly once per field.
#[must_use]
pub fn sanitize(input: &str) -> String {
    let without_brackets: String = input.chars().filter(|c| *c != '<' && *c != '>').collect();
    let escaped = without_brackets.replace('&', "&amp;");
    let without_quotes: String = escaped.chars().filter(|c| *c != '\'' && *c != '"').collect();
    let no_scheme = JAVASCRIPT_SCHEME.replace_all(&without_quotes, "");
    let no_handlers = EVENT_HANDLER_ATTR.replace_all(&no_scheme, "");
    let no_script = SCRIPT_SUBSTRING.replace_all(&no_handlers, "");
    no_script.trim().to_owned()
}
