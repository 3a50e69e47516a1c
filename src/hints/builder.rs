use std::sync::Arc;

use log::debug;
use rand::Rng;

use crate::expression::Expression;
use crate::hints::HintQueue;
use crate::solutions::{SolutionIndex, TieBreak};

/// Operation hints only reveal solutions at least this long; shorter
/// ones would give the whole answer away in one step.
const PREFERRED_MIN_NUMBERS: usize = 3;

/// Derives the round's five hints from the solved index.
///
/// Fixed order: exact-or-distance, solution count or shortest length,
/// the selected solution's final operation, its first operation, and its
/// full text. The representative is drawn through the injected random
/// source so the sequence is reproducible under a fixed seed. An empty
/// queue is only produced for an empty index, which a valid round never
/// builds.
pub fn build_hints<R: Rng>(
    index: &SolutionIndex,
    target: i64,
    tie_break: TieBreak,
    rng: &mut R,
) -> HintQueue {
    let Some(nearest) = index.nearest(target, tie_break) else {
        return HintQueue::new(Vec::new());
    };

    let mut hints = Vec::with_capacity(5);

    if nearest.value == target {
        hints.push(format!("{target} can be made exactly with this selection."));
        hints.push(format!(
            "There are {} solutions for {target} with this selection.",
            nearest.expressions.len()
        ));
    } else {
        let distance = (nearest.value - target).abs();
        hints.push(format!(
            "{target} cannot be made with this selection; the closest you can get is {distance} away."
        ));
        let shortest = nearest
            .expressions
            .iter()
            .map(|e| e.used().len())
            .min()
            .unwrap_or(0);
        hints.push(format!(
            "The shortest solution for {} uses {shortest} given numbers.",
            nearest.value
        ));
    }

    let preferred: Vec<&Arc<Expression>> = nearest
        .expressions
        .iter()
        .filter(|e| e.used().len() >= PREFERRED_MIN_NUMBERS)
        .collect();

    if let Some(expr) = pick(rng, &preferred) {
        debug!("revealing {} for value {}", expr.text(), nearest.value);
        if let Some((left, op, right)) = expr.final_step() {
            hints.push(format!(
                "A randomly selected solution ends with {left} {} {right}.",
                op.symbol()
            ));
        }
        if let Some((left, op, right)) = expr.first_step() {
            hints.push(format!(
                "The selected solution starts with {left} {} {right}.",
                op.symbol()
            ));
        }
        hints.push(format!("The selected solution is {expr}."));
    } else if let Some(expr) = pick_slice(rng, nearest.expressions) {
        // Nothing long enough for the two operation hints; fall back to
        // a two-number solution or a bare given number.
        hints.push("No solution exists that uses three or more numbers.".to_string());
        match expr.final_step() {
            Some((_, op, _)) => hints.push(format!(
                "A solution with two numbers uses the {} operator.",
                op.symbol()
            )),
            None => hints
                .push("There isn't even a two-number solution, it's only a given number.".to_string()),
        }
        hints.push(format!("The selected solution is {expr}."));
    }

    HintQueue::new(hints)
}

fn pick<'a, R: Rng>(rng: &mut R, pool: &[&'a Arc<Expression>]) -> Option<&'a Arc<Expression>> {
    if pool.is_empty() {
        None
    } else {
        pool.get(rng.gen_range(0..pool.len())).copied()
    }
}

fn pick_slice<'a, R: Rng>(rng: &mut R, pool: &'a [Arc<Expression>]) -> Option<&'a Arc<Expression>> {
    if pool.is_empty() {
        None
    } else {
        pool.get(rng.gen_range(0..pool.len()))
    }
}
