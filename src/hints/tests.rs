use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::generator::ExpressionStream;
use crate::hints::{build_hints, HintError, HintQueue};
use crate::solutions::{SolutionIndex, TieBreak};

fn hints_for(numbers: &[i64], target: i64, seed: u64) -> HintQueue {
    let index: SolutionIndex = ExpressionStream::new(numbers).unwrap().collect();
    let mut rng = SmallRng::seed_from_u64(seed);
    build_hints(&index, target, TieBreak::default(), &mut rng)
}

fn drain(mut queue: HintQueue) -> Vec<String> {
    let mut out = Vec::new();
    while let Ok(hint) = queue.pop_next() {
        out.push(hint.to_string());
    }
    out
}

#[test]
fn exact_match_with_only_short_solutions() {
    let hints = drain(hints_for(&[2, 3], 5, 0));
    assert_eq!(
        hints,
        vec![
            "5 can be made exactly with this selection.",
            "There are 1 solutions for 5 with this selection.",
            "No solution exists that uses three or more numbers.",
            "A solution with two numbers uses the + operator.",
            "The selected solution is 3 + 2.",
        ]
    );
}

#[test]
fn unreachable_target_reports_the_distance() {
    // {2, 4} reaches 2, 4, 6, 8; nothing makes 9.
    let hints = drain(hints_for(&[2, 4], 9, 0));
    assert_eq!(hints.len(), 5);
    assert_eq!(
        hints[0],
        "9 cannot be made with this selection; the closest you can get is 1 away."
    );
    assert_eq!(hints[1], "The shortest solution for 8 uses 2 given numbers.");
}

#[test]
fn long_solutions_reveal_their_operations() {
    let hints = drain(hints_for(&[1, 2, 3, 4], 10, 7));
    assert_eq!(hints.len(), 5);
    assert!(hints[2].starts_with("A randomly selected solution ends with "));
    assert!(hints[3].starts_with("The selected solution starts with "));
    assert!(hints[4].starts_with("The selected solution is "));
}

#[test]
fn literal_fallback_when_the_target_is_a_given_number() {
    // The only expression for 3 is the drawn 3 itself: 7 - 3 = 4 and the
    // quotient is not exact.
    let hints = drain(hints_for(&[3, 7], 3, 0));
    assert_eq!(hints[2], "No solution exists that uses three or more numbers.");
    assert_eq!(
        hints[3],
        "There isn't even a two-number solution, it's only a given number."
    );
    assert_eq!(hints[4], "The selected solution is 3.");
}

#[test]
fn single_number_selection_reports_an_exact_match() {
    // The engine itself handles a lone number; the round boundary is
    // what enforces the two-number minimum.
    let mut queue = hints_for(&[5], 5, 0);
    assert_eq!(
        queue.pop_next().unwrap(),
        "5 can be made exactly with this selection."
    );
}

#[test]
fn hints_pop_front_to_back_then_exhaust() {
    let mut queue = hints_for(&[2, 3], 5, 0);
    assert_eq!(queue.len(), 5);
    for expected_remaining in (0..5).rev() {
        assert!(queue.pop_next().is_ok());
        assert_eq!(queue.remaining(), expected_remaining);
    }
    assert_eq!(queue.pop_next(), Err(HintError::Exhausted));
    // Still exhausted; no wraparound.
    assert_eq!(queue.pop_next(), Err(HintError::Exhausted));
}

#[test]
fn same_seed_reproduces_the_same_hints() {
    let first = drain(hints_for(&[1, 2, 3, 4], 10, 42));
    let second = drain(hints_for(&[1, 2, 3, 4], 10, 42));
    assert_eq!(first, second);
}

#[test]
fn empty_index_yields_an_empty_queue() {
    let index = SolutionIndex::from_expressions(Vec::new());
    let mut rng = SmallRng::seed_from_u64(0);
    let mut queue = build_hints(&index, 5, TieBreak::default(), &mut rng);
    assert!(queue.is_empty());
    assert_eq!(queue.pop_next(), Err(HintError::Exhausted));
}
