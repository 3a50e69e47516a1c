use std::fmt;
use std::sync::Arc;

use crate::expression::ast::{ExprKind, Expression};

/// Rendering glyphs; distinct from the ASCII `*` and `/` accepted on
/// input so hints and declared equations never collide.
pub(crate) const MUL_SIGN: &str = "×";
pub(crate) const DIV_SIGN: &str = "÷";

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// `a + b - c - d`. Children are literals or multiplicative nodes, both
/// of which bind at least as tightly, so no parentheses are ever needed.
pub(crate) fn additive_text(
    addends: &[Arc<Expression>],
    subtrahends: &[Arc<Expression>],
) -> String {
    let mut out = String::new();
    for (i, addend) in addends.iter().enumerate() {
        if i > 0 {
            out.push_str(" + ");
        }
        out.push_str(addend.text());
    }
    for subtrahend in subtrahends {
        out.push_str(" - ");
        out.push_str(subtrahend.text());
    }
    out
}

/// `a × b ÷ c ÷ d`, parenthesising additive children, whose looser
/// binding would otherwise change the parsed meaning.
pub(crate) fn multiplicative_text(
    factors: &[Arc<Expression>],
    divisors: &[Arc<Expression>],
) -> String {
    let mut out = String::new();
    for (i, factor) in factors.iter().enumerate() {
        if i > 0 {
            out.push(' ');
            out.push_str(MUL_SIGN);
            out.push(' ');
        }
        push_term(&mut out, factor);
    }
    for divisor in divisors {
        out.push(' ');
        out.push_str(DIV_SIGN);
        out.push(' ');
        push_term(&mut out, divisor);
    }
    out
}

fn push_term(out: &mut String, term: &Expression) {
    if matches!(term.kind(), ExprKind::Additive { .. }) {
        out.push('(');
        out.push_str(term.text());
        out.push(')');
    } else {
        out.push_str(term.text());
    }
}
