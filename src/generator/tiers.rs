use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use log::debug;

use crate::expression::Expression;
use crate::generator::combine::combinations;
use crate::generator::errors::InputError;
use crate::multiset::Multiset;

/// A finite, lazily produced stream of every distinct expression over
/// the drawn numbers.
///
/// Tier `k` holds the expressions consuming exactly `k` numbers. Tiers
/// are built bottom-up, one at a time, when the iterator runs out of
/// buffered output; each completed tier stays available as an operand
/// source for all later tiers and is never recomputed. A fresh stream
/// over the same input yields identical expressions in identical order,
/// so the stream is restartable by reconstruction.
pub struct ExpressionStream {
    numbers: Vec<i64>,
    tiers: Vec<Tier>,
    pending: VecDeque<Arc<Expression>>,
}

/// One tier, deduplicated by canonical text with first-build-wins.
#[derive(Default)]
struct Tier {
    exprs: Vec<Arc<Expression>>,
    seen: HashSet<String>,
}

impl Tier {
    fn insert(&mut self, expr: Arc<Expression>, pending: &mut VecDeque<Arc<Expression>>) {
        if self.seen.insert(expr.text().to_string()) {
            self.exprs.push(Arc::clone(&expr));
            pending.push_back(expr);
        }
    }
}

impl ExpressionStream {
    /// Starts a stream over the given numbers. The full 2–8 round bound
    /// is enforced at the round boundary; the stream itself only needs a
    /// non-empty, all-positive input.
    pub fn new(numbers: &[i64]) -> Result<Self, InputError> {
        if numbers.is_empty() {
            return Err(InputError::BadCount(0));
        }
        if let Some(&bad) = numbers.iter().find(|&&n| n <= 0) {
            return Err(InputError::NonPositive(bad));
        }
        Ok(Self {
            numbers: numbers.to_vec(),
            tiers: Vec::new(),
            pending: VecDeque::new(),
        })
    }

    /// One literal per distinct input value, in input order; duplicate
    /// values collapse through the per-tier dedup.
    fn build_tier_one(&mut self) {
        let full: Multiset = self.numbers.iter().collect();
        let mut tier = Tier::default();
        for &value in &self.numbers {
            let mut unused = full.clone();
            unused.remove_one(value);
            tier.insert(Expression::literal(value, unused), &mut self.pending);
        }
        debug!("tier 1 complete: {} literals", tier.exprs.len());
        self.tiers.push(tier);
    }

    /// Builds tier `k` from every split (l, r) with l + r = k, l <= r.
    fn build_tier(&mut self, k: usize) {
        let mut tier = Tier::default();

        let mut l = 1;
        let mut r = k - 1;
        while r > l {
            for left in &self.tiers[l - 1].exprs {
                for right in &self.tiers[r - 1].exprs {
                    if left.is_compatible_with(right) {
                        for expr in combinations(left, right) {
                            tier.insert(expr, &mut self.pending);
                        }
                    }
                }
            }
            l += 1;
            r -= 1;
        }

        if r == l {
            // Unordered distinct pairs within the half tier, then
            // self-pairs where the input multiplicity allows them.
            let half = &self.tiers[l - 1].exprs;
            for (i, left) in half.iter().enumerate() {
                for right in &half[i + 1..] {
                    if left.is_compatible_with(right) {
                        for expr in combinations(left, right) {
                            tier.insert(expr, &mut self.pending);
                        }
                    }
                }
            }
            for expr in half {
                if expr.is_compatible_with(expr) {
                    for doubled in combinations(expr, expr) {
                        tier.insert(doubled, &mut self.pending);
                    }
                }
            }
        }

        debug!("tier {} complete: {} expressions", k, tier.exprs.len());
        self.tiers.push(tier);
    }
}

impl Iterator for ExpressionStream {
    type Item = Arc<Expression>;

    fn next(&mut self) -> Option<Arc<Expression>> {
        loop {
            if let Some(expr) = self.pending.pop_front() {
                return Some(expr);
            }
            let next_tier = self.tiers.len() + 1;
            if next_tier > self.numbers.len() {
                return None;
            }
            if next_tier == 1 {
                self.build_tier_one();
            } else {
                // A tier can come up empty; keep going until the last.
                self.build_tier(next_tier);
            }
        }
    }
}
