//! Best-effort extraction of structured claims from free-form model text.
//!
//! Model output has no schema — the only "wire format" is whatever labels the
//! prompts asked for (`Claimed τ = ...`, `Formula F = ...`). Both extractors
//! are total: absence of a match is a normal outcome returned as `None`, never
//! an error, because the round engine's retry logic treats a miss as a cheap
//! recoverable condition. First match wins, matching is case-insensitive.

use std::sync::LazyLock;

use regex::Regex;

/// A τ claim: `Claimed τ = 0.42`, `Revised tau = 1.0`, etc.
static TAU_CLAIM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:claimed|revised)\s*(?:τ|tau)\s*=\s*(\d+(?:\.\d+)?)")
        .expect("TAU_CLAIM_RE regex should compile")
});

/// A formula line: `Formula F = ...` or `New Formula F' = ...`.
static FORMULA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:new\s+)?formula\s+f'?\s*=\s*(.+)")
        .expect("FORMULA_RE regex should compile")
});

/// Extract the first labelled τ claim from generated text.
///
/// Values that parse but fall outside [0, 1] are discarded as a parse miss,
/// never clamped and never substituted with a default. τ is a fraction; an
/// impossible value must not enter the state.
pub fn extract_tau(text: &str) -> Option<f64> {
    TAU_CLAIM_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|tau| (0.0..=1.0).contains(tau))
}

/// Extract the first labelled formula from generated text.
///
/// Returns the trailing line content, trimmed; an empty remainder is a miss.
pub fn extract_formula(text: &str) -> Option<String> {
    FORMULA_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|formula| !formula.is_empty())
}
