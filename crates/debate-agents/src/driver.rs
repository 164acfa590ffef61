//! Game driver — runs a fixed number of rounds and assembles the report.

use tracing::{info, warn};

use protocol::{GameSummary, RoundRecord};

use crate::engine::RoundEngine;

/// Everything the game produced: per-round records plus the final summary.
///
/// An aborted round leaves no record — the gap in round numbers and the
/// `rounds_failed` counter are the only traces it leaves.
#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub rounds: Vec<RoundRecord>,
    pub summary: GameSummary,
}

/// Runs exactly `max_rounds` rounds and reports. Does not itself retry or
/// recover — resilience lives in the engine's Author-turn budget.
pub struct GameDriver {
    engine: RoundEngine,
    max_rounds: u32,
}

impl GameDriver {
    pub fn new(engine: RoundEngine, max_rounds: u32) -> Self {
        Self { engine, max_rounds }
    }

    /// Play the whole game.
    pub async fn run(mut self) -> GameOutcome {
        let mut rounds = Vec::new();
        let mut failed = 0u32;

        for round in 1..=self.max_rounds {
            info!(
                round,
                total = self.max_rounds,
                role = %self.engine.state().role(),
                "starting round"
            );
            match self.engine.play_round(round).await {
                Ok(record) => {
                    info!(
                        round,
                        role = %record.role,
                        classification = %record.classification,
                        tau = ?record.extracted_tau,
                        "round complete"
                    );
                    rounds.push(record);
                }
                Err(e) => {
                    warn!(round, error = %e, "round aborted");
                    failed += 1;
                }
            }
        }

        let state = self.engine.state();
        let summary = GameSummary {
            final_tau: state.current_tau(),
            tau_history: state.tau_history().to_vec(),
            rounds_completed: rounds.len() as u32,
            rounds_failed: failed,
        };
        info!("{}", summary.summary_line());

        GameOutcome { rounds, summary }
    }
}
