//! Application layer - Use cases and orchestration

pub mod generate;
pub mod prune;

pub use generate::{generate, generate_at};
pub use prune::{Candidate, PruneOutcome, PruneService};
