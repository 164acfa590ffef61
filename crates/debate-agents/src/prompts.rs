//! Prompt constants and builders for the two debate roles.
//!
//! Prompt versioning: bump `PROMPT_VERSION` whenever preamble content
//! changes, so a recorded transcript can be traced back to the wording that
//! produced it. The labelled output lines (`Formula F = ...`,
//! `Claimed τ = ...`, `Revised τ = ...`, `New Formula F' = ...`) are load
//! bearing — the parser anchors on them.

/// Prompt version. Bump on any preamble content change.
pub const PROMPT_VERSION: &str = "1.1.0";

/// Author preamble — proposes a formula and an explicit τ claim.
pub const AUTHOR_PREAMBLE: &str = "\
You are the Author in a structured debate about τ(RS, FPR).
Propose a complete (RS, FPR)-formula F in CNF notation and explicitly state
a numerical claim for τ, the best achievable fraction of satisfied
constraints.

Your output MUST contain these two labelled lines:
1. \"Formula F = ...\"
2. \"Claimed τ = ...\" (a number between 0 and 1)
";

/// Reviewer preamble — challenges the formula and the claimed τ.
pub const REVIEWER_PREAMBLE: &str = "\
You are the Reviewer in a structured debate about τ(RS, FPR).

Your task:
1. If the formula is incorrect, provide a counterexample assignment J that
   achieves a higher or lower FractionSat(F, J) and suggest a corrected
   formula with a different τ.
2. If the formula is valid, confirm the τ value.

Your output should contain these labelled lines:
1. \"Reviewer Response: ...\"
2. \"Revised τ = ...\" (if applicable, a number between 0 and 1)
3. \"New Formula F' = ...\" (if proposing a new formula)
";

/// Build the full Author prompt for the game's fixed parameters.
pub fn author_prompt(relation_set: &str, forbidden_patterns: &str) -> String {
    let mut prompt = String::from(AUTHOR_PREAMBLE);
    prompt.push_str(&format!(
        "\nRS = {relation_set}, FPR = {forbidden_patterns}\n"
    ));
    prompt
}

/// Build the full Reviewer prompt from the currently accepted claim.
pub fn reviewer_prompt(formula: &str, claimed_tau: f64) -> String {
    let mut prompt = String::from(REVIEWER_PREAMBLE);
    prompt.push_str(&format!(
        "\nThe Author's formula is:\n{formula}\nClaimed τ = {claimed_tau}\n"
    ));
    prompt
}
