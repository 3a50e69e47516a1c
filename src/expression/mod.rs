//! Immutable arithmetic expressions over the drawn numbers.

mod ast;
mod display;

pub use ast::{ExprKind, Expression, Op};
