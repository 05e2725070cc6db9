//! Name and email validation.
//!
//! Names are checked after sanitization against a fixed character class:
//! letters, whitespace, hyphens, apostrophes, and periods, 1–50
//! characters. Email gets only a minimal shape check — delivery problems
//! surface through the confirmation send, not up-front pattern matching.

use std::sync::LazyLock;

use regex::Regex;

// Fixed pattern literal; construction cannot fail at runtime.
#[allow(clippy::unwrap_used)]
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s\-'.]{1,50}$").unwrap());

/// Returns true iff `name` is 1–50 characters drawn solely from letters,
/// whitespace, hyphens, apostrophes, and periods.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

/// Minimal shape check for an email address: non-empty local and domain
/// parts around an `@`.
#[must_use]
pub fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}
