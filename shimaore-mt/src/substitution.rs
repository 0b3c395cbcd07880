//! Word-level substitution over whitespace-split tokens
//!
//! Substitution is strictly single-token, case-insensitive and context-free:
//! the input is lower-cased, split on whitespace, each token that is an
//! exact key in the dictionary is replaced by its mapped value, and the
//! tokens are rejoined with single spaces. A token with attached
//! punctuation ("bonjour!") is not a key and passes through unchanged —
//! tokenization is whitespace-only, and that granularity is part of the
//! observable behavior.

use std::collections::HashMap;

/// Rewrite `text` token-by-token through `dict`.
///
/// Returns the rewritten string and whether any token was replaced. The
/// flag is diagnostic only; routing never depends on it.
///
/// # Example
///
/// ```ignore
/// let mut dict = HashMap::new();
/// dict.insert("bonjour".to_string(), "kwezi".to_string());
/// let (rewritten, replaced) = substitute("Bonjour le monde", &dict);
/// assert_eq!(rewritten, "kwezi le monde");
/// assert!(replaced);
/// ```
pub fn substitute(text: &str, dict: &HashMap<String, String>) -> (String, bool) {
    let lowered = text.to_lowercase();
    let mut any_replaced = false;
    let rewritten: Vec<&str> = lowered
        .split_whitespace()
        .map(|token| match dict.get(token) {
            Some(replacement) => {
                any_replaced = true;
                replacement.as_str()
            }
            None => token,
        })
        .collect();
    (rewritten.join(" "), any_replaced)
}
