//! Negation cue detection over a fixed lookback window.
//!
//! A keyword occurrence counts as negated when any of the five
//! whitespace-delimited tokens preceding it carries a negation cue. The
//! window is blind to clause structure: in "I don't like tea, but create
//! a VPC" the cue can land on "vpc" when the phrasing is short. Callers
//! rely on this exact window, so don't widen or clause-scope it.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

/// Tokens scanned backwards from a keyword match.
pub const WINDOW_TOKENS: usize = 5;

// Whole-token cues; matched per token, so trailing punctuation
// ("without," / "don't!") still hits.
static NEGATION: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"\b(no|not|without|don't|dont|never|exclude|except|excluding)\b")
        .case_insensitive(true)
        .build()
        .unwrap()
});

/// Whether the keyword occurrence starting at byte `match_start` of `text`
/// sits inside a negated context.
pub fn in_negated_window(text: &str, match_start: usize) -> bool {
    let preceding = &text[..match_start];
    preceding
        .split_whitespace()
        .rev()
        .take(WINDOW_TOKENS)
        .any(|token| NEGATION.is_match(token))
}
