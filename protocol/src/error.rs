//! Round-level error taxonomy.
//!
//! Service failures and parse misses are *inputs* to the Author retry loop,
//! not errors that escape a round. The only way a round fails is by spending
//! the whole attempt budget; the Reviewer turn cannot fail at all (a miss is
//! implicit agreement). A failed round leaves the debate state untouched and
//! the game simply moves on to the next round.

use thiserror::Error;

/// Error returned when a round aborts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The Author could not produce a parsable formula/τ pair within the
    /// retry budget. State is unchanged and nothing was appended to history.
    #[error("author retries exhausted after {attempts} attempts")]
    AuthorRetriesExhausted { attempts: u32 },
}
