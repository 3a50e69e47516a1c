//! Countdown numbers round engine.
//!
//! From a selection of two to eight drawn positive numbers and a target,
//! the engine enumerates every value reachable with addition,
//! subtraction, multiplication and exact division (each drawn number
//! consumed at most once), keeps one canonical expression per distinct
//! rendering, answers exact and nearest-value queries against the
//! target, and produces a one-shot sequence of five escalating hints.

pub mod expression;
pub mod generator;
pub mod hints;
pub mod multiset;
pub mod round;
pub mod solutions;

// Re-export the main public API
pub use expression::{ExprKind, Expression, Op};
pub use generator::{validate_selection, ExpressionStream, InputError};
pub use hints::{HintError, HintQueue};
pub use multiset::Multiset;
pub use round::{ClosestSolution, NumbersJob, RoundConfig, RoundError, SolvedRound};
pub use solutions::{SolutionIndex, TieBreak};

/// Solve a full round synchronously with the default configuration.
///
/// This is a convenience wrapper over [`round::solve_round`]; rounds
/// that should not block the caller go through [`NumbersJob::spawn`]
/// instead.
///
/// # Errors
///
/// Returns an error when the selection has fewer than two or more than
/// eight numbers, or contains a non-positive number.
///
/// # Examples
///
/// ```
/// use countdown_numbers::solve;
///
/// let solved = solve(&[2, 3], 5)?;
/// assert!(solved.closest().is_exact());
/// assert_eq!(solved.closest().expression, "3 + 2");
/// # Ok::<(), countdown_numbers::RoundError>(())
/// ```
pub fn solve(numbers: &[i64], target: i64) -> Result<SolvedRound, RoundError> {
    round::solve_round(numbers, target, RoundConfig::default())
}
