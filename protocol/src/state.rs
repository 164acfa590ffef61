//! Debate state — roles, the current formula/τ pair, and τ history.

use serde::{Deserialize, Serialize};

/// Role whose turn it is in the debate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Proposes a formula and a τ claim.
    Author,
    /// Critiques the claim, optionally revising formula and/or τ.
    Reviewer,
}

impl Role {
    /// The role that takes the next turn.
    pub fn other(self) -> Self {
        match self {
            Self::Author => Self::Reviewer,
            Self::Reviewer => Self::Author,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Author => write!(f, "author"),
            Self::Reviewer => write!(f, "reviewer"),
        }
    }
}

/// How a turn's extracted τ relates to the previous value.
///
/// Reporting-only — never drives control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TauChange {
    /// No prior τ existed.
    Initial,
    /// No new τ was extracted; the prior value is assumed to persist.
    Unchanged,
    /// Reviewer found a better assignment.
    Increased,
    /// The prior claim was an overestimate.
    Decreased,
    /// Old and new values agree.
    Stable,
}

impl TauChange {
    /// Classify a τ transition.
    ///
    /// The old-absent rule wins over the new-absent rule, so
    /// `classify(None, None)` is `Initial`.
    pub fn classify(old: Option<f64>, new: Option<f64>) -> Self {
        match (old, new) {
            (None, _) => Self::Initial,
            (Some(_), None) => Self::Unchanged,
            (Some(o), Some(n)) if n > o => Self::Increased,
            (Some(o), Some(n)) if n < o => Self::Decreased,
            (Some(_), Some(_)) => Self::Stable,
        }
    }
}

impl std::fmt::Display for TauChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Initial => write!(f, "initial"),
            Self::Unchanged => write!(f, "unchanged"),
            Self::Increased => write!(f, "increased"),
            Self::Decreased => write!(f, "decreased"),
            Self::Stable => write!(f, "stable"),
        }
    }
}

/// Mutable state of one debate game, owned by the round engine.
///
/// Invariants:
/// - `tau_history` gains exactly one entry per successfully completed turn;
///   an aborted round appends nothing.
/// - `current_formula` / `current_tau` are only overwritten by successfully
///   parsed values — a reviewer parse miss carries the prior values forward.
/// - `role` flips only when a turn completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebateState {
    /// Allowed relation vocabulary (opaque identifier, fixed at creation).
    relation_set: String,
    /// Disallowed structural patterns (opaque identifier, fixed at creation).
    forbidden_patterns: String,
    role: Role,
    current_formula: Option<String>,
    current_tau: Option<f64>,
    tau_history: Vec<Option<f64>>,
}

impl DebateState {
    /// Create the state for a new game. The first turn is the Author's.
    pub fn new(relation_set: impl Into<String>, forbidden_patterns: impl Into<String>) -> Self {
        Self {
            relation_set: relation_set.into(),
            forbidden_patterns: forbidden_patterns.into(),
            role: Role::Author,
            current_formula: None,
            current_tau: None,
            tau_history: Vec::new(),
        }
    }

    pub fn relation_set(&self) -> &str {
        &self.relation_set
    }

    pub fn forbidden_patterns(&self) -> &str {
        &self.forbidden_patterns
    }

    /// Role whose turn is currently pending.
    pub fn role(&self) -> Role {
        self.role
    }

    pub fn current_formula(&self) -> Option<&str> {
        self.current_formula.as_deref()
    }

    pub fn current_tau(&self) -> Option<f64> {
        self.current_tau
    }

    /// τ recorded at the end of each completed round, in order.
    pub fn tau_history(&self) -> &[Option<f64>] {
        &self.tau_history
    }

    /// Commit a successful Author turn: both a formula and a τ claim were
    /// extracted. Appends to history and hands the turn to the Reviewer.
    pub fn commit_author(&mut self, formula: impl Into<String>, tau: f64) {
        self.current_formula = Some(formula.into());
        self.current_tau = Some(tau);
        self.tau_history.push(Some(tau));
        tracing::debug!(tau, "author claim committed");
        self.role = self.role.other();
    }

    /// Apply a Reviewer turn. Each field is overwritten only when a new
    /// value was extracted; a full parse miss is a no-op critique that
    /// carries the prior values forward. Always appends the resulting τ
    /// and hands the turn back to the Author.
    ///
    /// Returns the τ value that was appended to history.
    pub fn apply_review(
        &mut self,
        new_tau: Option<f64>,
        new_formula: Option<String>,
    ) -> Option<f64> {
        if let Some(formula) = new_formula {
            self.current_formula = Some(formula);
        }
        if let Some(tau) = new_tau {
            self.current_tau = Some(tau);
        }
        self.tau_history.push(self.current_tau);
        tracing::debug!(tau = ?self.current_tau, revised = new_tau.is_some(), "review applied");
        self.role = self.role.other();
        self.current_tau
    }

    /// Compact status line for logs.
    pub fn status_line(&self) -> String {
        format!(
            "[{}] τ={} | {} rounds recorded | RS={} FPR={}",
            self.role,
            self.current_tau
                .map_or_else(|| "unknown".to_string(), |t| t.to_string()),
            self.tau_history.len(),
            self.relation_set,
            self.forbidden_patterns,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = DebateState::new("ClausalR(2,2)", "TRUE");
        assert_eq!(state.role(), Role::Author);
        assert!(state.current_formula().is_none());
        assert!(state.current_tau().is_none());
        assert!(state.tau_history().is_empty());
    }

    #[test]
    fn test_commit_author_flips_role_and_appends() {
        let mut state = DebateState::new("ClausalR(2,2)", "TRUE");
        state.commit_author("(a OR b)", 0.75);

        assert_eq!(state.role(), Role::Reviewer);
        assert_eq!(state.current_formula(), Some("(a OR b)"));
        assert_eq!(state.current_tau(), Some(0.75));
        assert_eq!(state.tau_history(), &[Some(0.75)]);
    }

    #[test]
    fn test_review_parse_miss_carries_forward() {
        let mut state = DebateState::new("ClausalR(2,2)", "TRUE");
        state.commit_author("(a OR b)", 0.75);

        let appended = state.apply_review(None, None);
        assert_eq!(appended, Some(0.75));
        assert_eq!(state.role(), Role::Author);
        assert_eq!(state.current_formula(), Some("(a OR b)"));
        assert_eq!(state.tau_history(), &[Some(0.75), Some(0.75)]);
    }

    #[test]
    fn test_review_revises_both_fields() {
        let mut state = DebateState::new("ClausalR(2,2)", "TRUE");
        state.commit_author("(a OR b)", 0.9);

        state.apply_review(Some(0.6), Some("(a OR b) AND (NOT a OR c)".to_string()));
        assert_eq!(state.current_tau(), Some(0.6));
        assert_eq!(state.current_formula(), Some("(a OR b) AND (NOT a OR c)"));
        assert_eq!(state.tau_history(), &[Some(0.9), Some(0.6)]);
    }

    #[test]
    fn test_review_tau_only() {
        let mut state = DebateState::new("ClausalR(2,2)", "TRUE");
        state.commit_author("(a OR b)", 0.5);

        state.apply_review(Some(0.8), None);
        assert_eq!(state.current_tau(), Some(0.8));
        // Formula untouched by a τ-only revision.
        assert_eq!(state.current_formula(), Some("(a OR b)"));
    }

    #[test]
    fn test_history_grows_one_entry_per_turn() {
        let mut state = DebateState::new("R", "F");
        state.commit_author("f1", 0.1);
        state.apply_review(Some(0.2), None);
        state.commit_author("f2", 0.3);
        state.apply_review(None, None);
        assert_eq!(
            state.tau_history(),
            &[Some(0.1), Some(0.2), Some(0.3), Some(0.3)]
        );
    }

    #[test]
    fn test_classify_initial() {
        assert_eq!(TauChange::classify(None, Some(0.5)), TauChange::Initial);
        assert_eq!(TauChange::classify(None, None), TauChange::Initial);
    }

    #[test]
    fn test_classify_unchanged() {
        assert_eq!(TauChange::classify(Some(0.5), None), TauChange::Unchanged);
    }

    #[test]
    fn test_classify_ordering() {
        assert_eq!(
            TauChange::classify(Some(0.5), Some(0.9)),
            TauChange::Increased
        );
        assert_eq!(
            TauChange::classify(Some(0.9), Some(0.6)),
            TauChange::Decreased
        );
    }

    #[test]
    fn test_classify_stable_for_any_present_value() {
        for x in [0.0, 0.42, 0.75, 1.0] {
            assert_eq!(TauChange::classify(Some(x), Some(x)), TauChange::Stable);
        }
    }

    #[test]
    fn test_role_display_and_other() {
        assert_eq!(Role::Author.to_string(), "author");
        assert_eq!(Role::Reviewer.to_string(), "reviewer");
        assert_eq!(Role::Author.other(), Role::Reviewer);
        assert_eq!(Role::Reviewer.other(), Role::Author);
    }

    #[test]
    fn test_tau_change_display() {
        assert_eq!(TauChange::Initial.to_string(), "initial");
        assert_eq!(TauChange::Unchanged.to_string(), "unchanged");
        assert_eq!(TauChange::Increased.to_string(), "increased");
        assert_eq!(TauChange::Decreased.to_string(), "decreased");
        assert_eq!(TauChange::Stable.to_string(), "stable");
    }

    #[test]
    fn test_status_line() {
        let mut state = DebateState::new("ClausalR(2,2)", "TRUE");
        assert!(state.status_line().contains("τ=unknown"));
        state.commit_author("(a OR b)", 0.75);
        let line = state.status_line();
        assert!(line.contains("[reviewer]"));
        assert!(line.contains("τ=0.75"));
        assert!(line.contains("RS=ClausalR(2,2)"));
    }

    #[test]
    fn test_state_serde_roundtrip() {
        let mut state = DebateState::new("ClausalR(2,2)", "TRUE");
        state.commit_author("(a OR b)", 0.75);

        let json = serde_json::to_string(&state).unwrap();
        let restored: DebateState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.role(), Role::Reviewer);
        assert_eq!(restored.current_tau(), Some(0.75));
        assert_eq!(restored.tau_history(), state.tau_history());
    }
}
