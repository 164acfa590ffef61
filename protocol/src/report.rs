//! Structured records reported by the game: one per round, one per game.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{Role, TauChange};

/// Record of a single completed round (one turn by one role).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number (1-indexed).
    pub round: u32,
    /// Role that took this turn.
    pub role: Role,
    /// Raw text produced by the completion service.
    pub raw_response: String,
    /// τ extracted from the response, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_tau: Option<f64>,
    /// Formula extracted from the response, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_formula: Option<String>,
    /// How the extracted τ relates to the previous value.
    pub classification: TauChange,
    /// Turn duration in milliseconds (all attempts included).
    pub duration_ms: u64,
    /// When the round started.
    pub started_at: DateTime<Utc>,
}

/// End-of-game summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSummary {
    /// Final τ estimate, or `None` if no claim was ever established.
    pub final_tau: Option<f64>,
    /// τ recorded at the end of each completed round, in order.
    pub tau_history: Vec<Option<f64>>,
    /// Rounds that committed a state update.
    pub rounds_completed: u32,
    /// Rounds aborted by exhausted Author retries.
    pub rounds_failed: u32,
}

impl GameSummary {
    /// Compact summary line. States `unknown` explicitly rather than
    /// fabricating a value when no τ was ever established.
    pub fn summary_line(&self) -> String {
        let tau = self
            .final_tau
            .map_or_else(|| "unknown".to_string(), |t| t.to_string());
        format!(
            "Final τ(RS, FPR) estimate: {} | {} rounds completed, {} failed",
            tau, self.rounds_completed, self.rounds_failed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_record_serde_roundtrip() {
        let record = RoundRecord {
            round: 2,
            role: Role::Reviewer,
            raw_response: "Reviewer Response: looks fine\nRevised τ = 0.75".into(),
            extracted_tau: Some(0.75),
            extracted_formula: None,
            classification: TauChange::Stable,
            duration_ms: 1234,
            started_at: Utc::now(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let restored: RoundRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.round, 2);
        assert_eq!(restored.role, Role::Reviewer);
        assert_eq!(restored.extracted_tau, Some(0.75));
        assert_eq!(restored.classification, TauChange::Stable);
        // Absent fields are skipped on the wire, not serialized as null.
        assert!(!json.contains("extracted_formula"));
    }

    #[test]
    fn test_summary_line_with_final_tau() {
        let summary = GameSummary {
            final_tau: Some(0.75),
            tau_history: vec![Some(0.75), Some(0.75)],
            rounds_completed: 2,
            rounds_failed: 0,
        };
        let line = summary.summary_line();
        assert!(line.contains("0.75"));
        assert!(line.contains("2 rounds completed"));
    }

    #[test]
    fn test_summary_line_unknown_when_never_established() {
        let summary = GameSummary {
            final_tau: None,
            tau_history: vec![],
            rounds_completed: 0,
            rounds_failed: 5,
        };
        assert!(summary.summary_line().contains("unknown"));
    }
}
