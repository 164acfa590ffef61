//! Author-Reviewer debate orchestrator for estimating τ(RS, FPR).
//!
//! Drives a scripted two-role debate against an opaque text-completion
//! backend: the Author proposes a CNF formula and a τ claim, the Reviewer
//! critiques it, and the round engine tracks how the claimed value evolves.
//! The pure protocol (state, parsing, classification) lives in the
//! `protocol` crate; this crate owns the prompts, the completion-service
//! boundary, the per-round orchestration, and the game loop.

pub mod completion;
pub mod config;
pub mod driver;
pub mod engine;
pub mod prompts;
