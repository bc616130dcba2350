use std::sync::OnceLock;

use regex::Regex;

/// Anything that is not a letter, a number, an underscore or whitespace.
///
/// Letters and numbers are the general categories `L` and `N`, so combining
/// marks are deleted and digits such as `²` are kept.
fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"[^\p{L}\p{N}_\s]").expect("noise pattern is a valid regex")
    })
}

/// Lowercases text and deletes punctuation and symbols. Deleted characters
/// are not replaced, so `"don't"` becomes `"dont"`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Noise;

impl Noise {
    pub fn new() -> Self {
        Self
    }

    pub fn clean(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        pattern().replace_all(&lowered, "").into_owned()
    }
}
