//! Word tokenizer used by the classifier.
//!
//! Whitespace splits words; punctuation is stripped from the edges only, so
//! "pre-meeting" and "call/conference" stay single tokens.

use regex::Regex;
use std::sync::LazyLock;

static CLITIC: LazyLock<Regex> = LazyLock::new(|| {
    // Trailing contraction / possessive, split off as its own token.
    Regex::new(r"^(.+?)((?:'|’)(?:s|m|d|ll|re|ve)|n(?:'|’)t)$").expect("static clitic regex")
});

/// Lower-case `text` and split it into word tokens.
///
/// Total: empty or punctuation-only input gives an empty vec.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut out = Vec::new();

    for raw in lower.split_whitespace() {
        let word = raw.trim_matches(|c: char| !c.is_alphanumeric());
        if word.is_empty() {
            continue;
        }
        match CLITIC.captures(word) {
            Some(caps) => {
                out.push(caps[1].to_string());
                out.push(caps[2].to_string());
            }
            None => out.push(word.to_string()),
        }
    }

    out
}
