//! Per-round background solving and the query surface built on it.

mod errors;
mod job;

pub use errors::RoundError;
pub use job::{solve_round, ClosestSolution, NumbersJob, RoundConfig, SolvedRound};

#[cfg(test)]
mod tests;
