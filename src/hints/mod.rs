//! One-shot escalating hints toward the closest reachable value.

mod builder;
mod errors;
mod queue;

pub use builder::build_hints;
pub use errors::HintError;
pub use queue::HintQueue;

#[cfg(test)]
mod tests;
