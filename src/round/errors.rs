use thiserror::Error;

use crate::generator::InputError;
use crate::hints::HintError;

/// Errors surfaced by a numbers round.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    #[error(transparent)]
    Input(#[from] InputError),
    /// The background solver has not finished; retry later.
    #[error("the numbers are still being solved")]
    NotReady,
    #[error(transparent)]
    Hint(#[from] HintError),
    /// The worker thread could not be started, panicked, or was poisoned.
    #[error("the background solver task failed")]
    TaskFailed,
}
