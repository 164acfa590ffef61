//! Round-state protocol for the Author-Reviewer semantic debate.
//!
//! Two roles alternate turns arguing about τ(RS, FPR) — the best achievable
//! fraction of satisfied constraints for formulas built from relation set RS
//! under forbidden-pattern rule FPR. The Author proposes a CNF formula and a
//! numeric τ claim; the Reviewer critiques it and may revise either. This
//! crate holds the pure core of that loop: state tracking, free-text claim
//! extraction, tau-change classification, retry policy, and the structured
//! records the orchestration layer reports.
//!
//! # Turn Flow
//!
//! ```text
//! AuthorTurn ──(formula + τ extracted)──▶ ReviewerTurn
//!     │ ▲                                      │
//!     │ └── retry (bounded) on parse miss      │ (parse miss = implicit
//!     │      or service failure                │  agreement, no retry)
//!     └── retries exhausted → round aborted,   ▼
//!         state unchanged              AuthorTurn (next round)
//! ```
//!
//! The formula itself is opaque text — nothing here evaluates satisfiability.
//! τ is whatever the text generator claims.

pub mod error;
pub mod parser;
pub mod report;
pub mod retry;
pub mod state;

pub use error::RoundError;
pub use parser::{extract_formula, extract_tau};
pub use report::{GameSummary, RoundRecord};
pub use retry::RetryPolicy;
pub use state::{DebateState, Role, TauChange};
