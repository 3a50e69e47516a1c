use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HintError {
    #[error("all hints have been given already")]
    Exhausted,
}
