//! Value-sorted index over the generated expressions.

mod index;

pub use index::{Nearest, SolutionIndex, TieBreak};
