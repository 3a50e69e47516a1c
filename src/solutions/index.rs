use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::Arc;

use log::debug;

use crate::expression::Expression;

/// Policy for a target sitting exactly between two reachable values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Prefer the higher candidate (the historical behavior).
    #[default]
    Higher,
    /// Prefer the lower candidate.
    Lower,
}

/// Every generated expression, grouped by value and sorted by value.
///
/// Built once per round after the generator is exhausted; immutable
/// afterwards, so concurrent readers need no synchronisation. Within a
/// group, expressions keep generation order: the first entry is the
/// first-built representative.
#[derive(Debug, Default)]
pub struct SolutionIndex {
    by_value: BTreeMap<i64, Vec<Arc<Expression>>>,
    total: usize,
}

/// Result of an exact-or-nearest lookup.
#[derive(Debug)]
pub struct Nearest<'a> {
    pub value: i64,
    pub expressions: &'a [Arc<Expression>],
}

impl SolutionIndex {
    pub fn from_expressions<I>(expressions: I) -> Self
    where
        I: IntoIterator<Item = Arc<Expression>>,
    {
        let mut by_value: BTreeMap<i64, Vec<Arc<Expression>>> = BTreeMap::new();
        let mut total = 0;
        for expr in expressions {
            by_value.entry(expr.value()).or_default().push(expr);
            total += 1;
        }
        debug!(
            "indexed {} expressions across {} distinct values",
            total,
            by_value.len()
        );
        Self { by_value, total }
    }

    /// All expressions evaluating to `target`, or an empty slice.
    pub fn exact_matches(&self, target: i64) -> &[Arc<Expression>] {
        self.by_value
            .get(&target)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The greatest reachable value at most `target`.
    pub fn floor(&self, target: i64) -> Option<i64> {
        self.by_value
            .range(..=target)
            .next_back()
            .map(|(&value, _)| value)
    }

    /// The least reachable value at least `target`.
    pub fn ceiling(&self, target: i64) -> Option<i64> {
        self.by_value.range(target..).next().map(|(&value, _)| value)
    }

    /// The exact match when one exists, otherwise the closest reachable
    /// value under the given tie-break policy. `None` only for an empty
    /// index.
    pub fn nearest(&self, target: i64, tie_break: TieBreak) -> Option<Nearest<'_>> {
        if self.by_value.contains_key(&target) {
            return Some(Nearest {
                value: target,
                expressions: self.exact_matches(target),
            });
        }

        let below = self
            .by_value
            .range(..target)
            .next_back()
            .map(|(&value, _)| value);
        let above = self
            .by_value
            .range((Bound::Excluded(target), Bound::Unbounded))
            .next()
            .map(|(&value, _)| value);

        let value = match (below, above) {
            (None, None) => return None,
            (Some(below), None) => below,
            (None, Some(above)) => above,
            (Some(below), Some(above)) => {
                if above - target > target - below {
                    below
                } else if above - target < target - below {
                    above
                } else {
                    match tie_break {
                        TieBreak::Higher => above,
                        TieBreak::Lower => below,
                    }
                }
            }
        };

        Some(Nearest {
            value,
            expressions: self.exact_matches(value),
        })
    }

    /// Distinct reachable values in ascending order.
    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.by_value.keys().copied()
    }

    /// Every indexed expression, ascending by value; generation order
    /// within a value. Exposed for persistence and audit.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Expression>> + '_ {
        self.by_value.values().flatten()
    }

    /// Total number of indexed expressions.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

impl FromIterator<Arc<Expression>> for SolutionIndex {
    fn from_iter<I: IntoIterator<Item = Arc<Expression>>>(iter: I) -> Self {
        Self::from_expressions(iter)
    }
}
