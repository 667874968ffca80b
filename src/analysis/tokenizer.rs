//! Word tokenizer.

use std::sync::OnceLock;

use regex::Regex;

fn token_regex() -> &'static Regex {
    static TOKEN_RE: OnceLock<Regex> = OnceLock::new();
    // Word runs (joined through inner hyphens and periods), or punctuation runs.
    TOKEN_RE.get_or_init(|| {
        Regex::new(r"\w+(?:[-.]\w+)*|[^\w\s]+").expect("token regex must compile")
    })
}

/// Split `text` into word and punctuation tokens, in order.
///
/// The text is not case-folded here.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    token_regex().find_iter(text).map(|m| m.as_str())
}

/// Letters and digits only (so punctuation and `_` runs are rejected).
pub fn is_alphanumeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}
