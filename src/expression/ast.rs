use std::sync::Arc;

use crate::expression::display;
use crate::multiset::Multiset;

/// An immutable arithmetic expression over the drawn numbers.
///
/// Value, consumed/remaining number multisets, canonical text, and the
/// set of constituent values are all fixed at construction. Expressions
/// are shared via [`Arc`]: a tier-two expression can be a child of many
/// later-tier expressions without copying.
#[derive(Debug)]
pub struct Expression {
    value: i64,
    used: Multiset,
    unused: Multiset,
    constituents: Vec<i64>,
    text: String,
    kind: ExprKind,
}

/// The shape of an expression node.
///
/// Additive children are never themselves additive, and multiplicative
/// children never multiplicative: combining same-kind operands flattens
/// their children into one node, since both operations are associative.
#[derive(Debug)]
pub enum ExprKind {
    Literal,
    Additive {
        addends: Vec<Arc<Expression>>,
        subtrahends: Vec<Arc<Expression>>,
    },
    Multiplicative {
        factors: Vec<Arc<Expression>>,
        divisors: Vec<Arc<Expression>>,
    },
}

/// A binary arithmetic operator, as revealed in hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => display::MUL_SIGN,
            Op::Div => display::DIV_SIGN,
        }
    }
}

impl Expression {
    /// A single drawn number. `unused` is the input multiset with one
    /// instance of `value` already removed.
    pub fn literal(value: i64, unused: Multiset) -> Arc<Self> {
        Arc::new(Self {
            value,
            used: [value].into_iter().collect(),
            unused,
            constituents: vec![value],
            text: value.to_string(),
            kind: ExprKind::Literal,
        })
    }

    /// `larger + smaller`, or `larger - smaller` when `subtract` is set.
    /// Callers must pass the larger-valued operand first; subtraction is
    /// only valid when the difference is strictly positive.
    pub(crate) fn additive(
        larger: &Arc<Expression>,
        smaller: &Arc<Expression>,
        subtract: bool,
    ) -> Arc<Self> {
        let (mut addends, mut subtrahends) = match &larger.kind {
            ExprKind::Additive {
                addends,
                subtrahends,
            } => (addends.clone(), subtrahends.clone()),
            _ => (vec![Arc::clone(larger)], Vec::new()),
        };

        {
            // Subtracting flips which side the right operand's terms join.
            let (plus, minus) = if subtract {
                (&mut subtrahends, &mut addends)
            } else {
                (&mut addends, &mut subtrahends)
            };
            match &smaller.kind {
                ExprKind::Additive {
                    addends: right_adds,
                    subtrahends: right_subs,
                } => {
                    plus.extend(right_adds.iter().cloned());
                    minus.extend(right_subs.iter().cloned());
                }
                _ => plus.push(Arc::clone(smaller)),
            }
        }

        sort_siblings(&mut addends);
        sort_siblings(&mut subtrahends);

        let value = addends.iter().map(|e| e.value).sum::<i64>()
            - subtrahends.iter().map(|e| e.value).sum::<i64>();
        let text = display::additive_text(&addends, &subtrahends);
        Self::combined(
            value,
            text,
            larger,
            smaller,
            ExprKind::Additive {
                addends,
                subtrahends,
            },
        )
    }

    /// `larger × smaller`, or `larger ÷ smaller` when `divide` is set.
    /// Callers must pass the larger-valued operand first; division is
    /// only valid when it is exact.
    pub(crate) fn multiplicative(
        larger: &Arc<Expression>,
        smaller: &Arc<Expression>,
        divide: bool,
    ) -> Arc<Self> {
        let (mut factors, mut divisors) = match &larger.kind {
            ExprKind::Multiplicative { factors, divisors } => {
                (factors.clone(), divisors.clone())
            }
            _ => (vec![Arc::clone(larger)], Vec::new()),
        };

        {
            let (plus, minus) = if divide {
                (&mut divisors, &mut factors)
            } else {
                (&mut factors, &mut divisors)
            };
            match &smaller.kind {
                ExprKind::Multiplicative {
                    factors: right_factors,
                    divisors: right_divisors,
                } => {
                    plus.extend(right_factors.iter().cloned());
                    minus.extend(right_divisors.iter().cloned());
                }
                _ => plus.push(Arc::clone(smaller)),
            }
        }

        sort_siblings(&mut factors);
        sort_siblings(&mut divisors);

        let value = factors.iter().map(|e| e.value).product::<i64>()
            / divisors.iter().map(|e| e.value).product::<i64>();
        let text = display::multiplicative_text(&factors, &divisors);
        Self::combined(
            value,
            text,
            larger,
            smaller,
            ExprKind::Multiplicative { factors, divisors },
        )
    }

    fn combined(
        value: i64,
        text: String,
        larger: &Arc<Expression>,
        smaller: &Arc<Expression>,
        kind: ExprKind,
    ) -> Arc<Self> {
        let used = larger.used.union(&smaller.used);
        let unused = larger.unused.difference(&smaller.used);
        let mut constituents: Vec<i64> = larger
            .constituents
            .iter()
            .chain(smaller.constituents.iter())
            .copied()
            .collect();
        constituents.push(value);
        constituents.sort_unstable();
        constituents.dedup();
        Arc::new(Self {
            value,
            used,
            unused,
            constituents,
            text,
            kind,
        })
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// The multiset of drawn-number instances this expression consumes.
    pub fn used(&self) -> &Multiset {
        &self.used
    }

    /// The drawn-number instances still available alongside this
    /// expression; together with [`used`](Self::used) it partitions the
    /// original input.
    pub fn unused(&self) -> &Multiset {
        &self.unused
    }

    pub fn kind(&self) -> &ExprKind {
        &self.kind
    }

    /// Canonical rendering; doubles as the deduplication key.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_literal(&self) -> bool {
        matches!(self.kind, ExprKind::Literal)
    }

    /// Every intermediate value appearing in this expression, final value
    /// included, sorted ascending.
    pub fn constituents(&self) -> &[i64] {
        &self.constituents
    }

    pub fn is_constituent(&self, value: i64) -> bool {
        self.constituents.binary_search(&value).is_ok()
    }

    /// Whether the two expressions consume disjoint instances of the
    /// drawn numbers, so combining them never double-spends a tile.
    pub fn is_compatible_with(&self, other: &Expression) -> bool {
        self.used.is_subset_of(&other.unused) && other.used.is_subset_of(&self.unused)
    }

    /// The last-applied operation when the expression is read as a chain
    /// of binary operations: `(left value, operator, right value)`.
    /// `None` for literals.
    pub fn final_step(&self) -> Option<(i64, Op, i64)> {
        match &self.kind {
            ExprKind::Literal => None,
            ExprKind::Additive {
                addends,
                subtrahends,
            } => {
                if let Some(last) = subtrahends.last() {
                    Some((self.value + last.value, Op::Sub, last.value))
                } else {
                    let last = addends.last()?;
                    Some((self.value - last.value, Op::Add, last.value))
                }
            }
            ExprKind::Multiplicative { factors, divisors } => {
                if let Some(last) = divisors.last() {
                    Some((self.value * last.value, Op::Div, last.value))
                } else {
                    let last = factors.last()?;
                    Some((self.value / last.value, Op::Mul, last.value))
                }
            }
        }
    }

    /// The first-applied operation in the same binary-chain reading,
    /// found by descending into compound operands left first. `None` for
    /// literals.
    pub fn first_step(&self) -> Option<(&Expression, Op, &Expression)> {
        let (head, op, second) = match &self.kind {
            ExprKind::Literal => return None,
            ExprKind::Additive {
                addends,
                subtrahends,
            } => {
                let head = addends.first()?;
                match addends.get(1) {
                    Some(next) => (head, Op::Add, next),
                    None => (head, Op::Sub, subtrahends.first()?),
                }
            }
            ExprKind::Multiplicative { factors, divisors } => {
                let head = factors.first()?;
                match factors.get(1) {
                    Some(next) => (head, Op::Mul, next),
                    None => (head, Op::Div, divisors.first()?),
                }
            }
        };

        if let Some(step) = head.first_step() {
            return Some(step);
        }
        if let Some(step) = second.first_step() {
            return Some(step);
        }
        Some((head.as_ref(), op, second.as_ref()))
    }
}

/// Canonical sibling order: descending value, then ascending text.
fn sort_siblings(children: &mut [Arc<Expression>]) {
    children.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.text.cmp(&b.text)));
}
