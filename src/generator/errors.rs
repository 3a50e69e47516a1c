use thiserror::Error;

/// Input problems caught before any generation work starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("expected between 2 and 8 drawn numbers, got {0}")]
    BadCount(usize),
    #[error("drawn numbers must be positive, got {0}")]
    NonPositive(i64),
}
