//! Round engine — one protocol alternation per call.
//!
//! The asymmetry between the two turns is deliberate: the Author must
//! establish a valid formula/τ pair before any review is meaningful, so its
//! turn is retried against a bounded budget; the Reviewer is allowed to be a
//! no-op critique, so a parse miss there is implicit agreement and the round
//! still completes.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tracing::{info, warn};

use protocol::{
    extract_formula, extract_tau, DebateState, RetryPolicy, Role, RoundError, RoundRecord,
    TauChange,
};

use crate::completion::CompletionService;
use crate::prompts;

/// Drives one turn of the debate per `play_round` call.
pub struct RoundEngine {
    service: Arc<dyn CompletionService>,
    state: DebateState,
    retry: RetryPolicy,
    max_tokens: u32,
}

impl RoundEngine {
    /// Create an engine around an injected completion service.
    pub fn new(
        service: Arc<dyn CompletionService>,
        state: DebateState,
        retry: RetryPolicy,
        max_tokens: u32,
    ) -> Self {
        Self {
            service,
            state,
            retry,
            max_tokens,
        }
    }

    /// The debate state as of the last completed round.
    pub fn state(&self) -> &DebateState {
        &self.state
    }

    /// Play one round: a single turn by the currently pending role.
    ///
    /// On success the role has flipped and exactly one τ entry was appended
    /// to history. On failure (Author budget exhausted) the state is exactly
    /// as it was before the call.
    pub async fn play_round(&mut self, round: u32) -> Result<RoundRecord, RoundError> {
        let started_at = Utc::now();
        let start = Instant::now();
        match self.state.role() {
            Role::Author => self.author_turn(round, started_at, start).await,
            Role::Reviewer => Ok(self.reviewer_turn(round, started_at, start).await),
        }
    }

    async fn author_turn(
        &mut self,
        round: u32,
        started_at: chrono::DateTime<Utc>,
        start: Instant,
    ) -> Result<RoundRecord, RoundError> {
        let prompt =
            prompts::author_prompt(self.state.relation_set(), self.state.forbidden_patterns());

        for attempt in 1..=self.retry.max_attempts {
            match self.service.complete(&prompt, self.max_tokens).await {
                Ok(text) => {
                    let tau = extract_tau(&text);
                    let formula = extract_formula(&text);
                    if let (Some(tau), Some(formula)) = (tau, formula) {
                        let classification =
                            TauChange::classify(self.state.current_tau(), Some(tau));
                        self.state.commit_author(formula.clone(), tau);
                        info!(round, attempt, tau, "author claim accepted");
                        return Ok(RoundRecord {
                            round,
                            role: Role::Author,
                            raw_response: text,
                            extracted_tau: Some(tau),
                            extracted_formula: Some(formula),
                            classification,
                            duration_ms: start.elapsed().as_millis() as u64,
                            started_at,
                        });
                    }
                    warn!(
                        round,
                        attempt,
                        max_attempts = self.retry.max_attempts,
                        "author response missing a parsable formula/τ pair"
                    );
                }
                Err(e) => warn!(
                    round,
                    attempt,
                    max_attempts = self.retry.max_attempts,
                    error = %e,
                    "completion service failed"
                ),
            }

            if let Some(delay) = self.retry.delay_after(attempt) {
                tokio::time::sleep(delay).await;
            }
        }

        Err(RoundError::AuthorRetriesExhausted {
            attempts: self.retry.max_attempts,
        })
    }

    async fn reviewer_turn(
        &mut self,
        round: u32,
        started_at: chrono::DateTime<Utc>,
        start: Instant,
    ) -> RoundRecord {
        // The role only becomes Reviewer after a committed author claim, so
        // both fields are present here.
        let formula = self.state.current_formula().unwrap_or("").to_string();
        let claimed_tau = self.state.current_tau().unwrap_or(0.0);
        let prompt = prompts::reviewer_prompt(&formula, claimed_tau);

        // No retry: a reviewer that produces nothing usable is treated as
        // implicit agreement with the standing claim.
        let text = match self.service.complete(&prompt, self.max_tokens).await {
            Ok(text) => text,
            Err(e) => {
                warn!(round, error = %e, "completion service failed; treating as no-op critique");
                String::new()
            }
        };

        let new_tau = extract_tau(&text);
        let new_formula = extract_formula(&text);
        let classification = TauChange::classify(self.state.current_tau(), new_tau);
        let recorded = self.state.apply_review(new_tau, new_formula.clone());
        info!(round, classification = %classification, tau = ?recorded, "review applied");

        RoundRecord {
            round,
            role: Role::Reviewer,
            raw_response: text,
            extracted_tau: new_tau,
            extracted_formula: new_formula,
            classification,
            duration_ms: start.elapsed().as_millis() as u64,
            started_at,
        }
    }
}
