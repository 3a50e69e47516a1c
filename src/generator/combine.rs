use std::sync::Arc;

use crate::expression::Expression;

/// All legal combinations of two compatible expressions: sum, strictly
/// positive difference, product, and exact quotient.
///
/// The larger-valued operand always serves as minuend/dividend, so every
/// result is a positive integer by construction. A candidate whose value
/// already appears among either operand's constituents is a trivial
/// combination (it reproduces a visible intermediate value) and is
/// skipped before construction.
pub(crate) fn combinations(
    left: &Arc<Expression>,
    right: &Arc<Expression>,
) -> Vec<Arc<Expression>> {
    let (larger, smaller) = if left.value() < right.value() {
        (right, left)
    } else {
        (left, right)
    };
    let trivial = |value: i64| larger.is_constituent(value) || smaller.is_constituent(value);

    let mut results = Vec::with_capacity(4);

    if !trivial(larger.value() + smaller.value()) {
        results.push(Expression::additive(larger, smaller, false));
    }

    let difference = larger.value() - smaller.value();
    if difference > 0 && !trivial(difference) {
        results.push(Expression::additive(larger, smaller, true));
    }

    if !trivial(larger.value() * smaller.value()) {
        results.push(Expression::multiplicative(larger, smaller, false));
    }

    if larger.value() % smaller.value() == 0 && !trivial(larger.value() / smaller.value()) {
        results.push(Expression::multiplicative(larger, smaller, true));
    }

    results
}
