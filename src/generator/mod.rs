//! Tier-by-tier generation of every distinct expression.

mod combine;
mod errors;
mod tiers;

pub use errors::InputError;
pub use tiers::ExpressionStream;

/// A round draws at least this many numbers.
pub const MIN_NUMBERS: usize = 2;
/// A round draws at most this many numbers.
pub const MAX_NUMBERS: usize = 8;

/// Rejects selections a round may not draw, before generation begins.
///
/// # Errors
///
/// Returns an error when the selection has fewer than two or more than
/// eight numbers, or contains a zero or negative number.
pub fn validate_selection(numbers: &[i64]) -> Result<(), InputError> {
    if !(MIN_NUMBERS..=MAX_NUMBERS).contains(&numbers.len()) {
        return Err(InputError::BadCount(numbers.len()));
    }
    if let Some(&bad) = numbers.iter().find(|&&n| n <= 0) {
        return Err(InputError::NonPositive(bad));
    }
    Ok(())
}
