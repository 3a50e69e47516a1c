use crate::generator::InputError;
use crate::hints::HintError;
use crate::round::{solve_round, NumbersJob, RoundConfig, RoundError};
use crate::solutions::TieBreak;

#[test]
fn exact_round_for_the_small_selection() {
    let solved = solve_round(&[1, 1, 2, 2, 3], 7, RoundConfig::default()).unwrap();
    let closest = solved.closest();
    assert!(closest.is_exact());
    assert_eq!(closest.value, 7);
    assert_eq!(closest.distance(), 0);
    assert!(!solved.exact_matches().is_empty());
    assert!(!closest.expression.is_empty());
}

#[test]
fn unreachable_target_reports_signed_offset() {
    // {2, 4} reaches 2, 4, 6, 8.
    let solved = solve_round(&[2, 4], 9, RoundConfig::default()).unwrap();
    let closest = solved.closest();
    assert!(!closest.is_exact());
    assert_eq!(closest.value, 8);
    assert_eq!(closest.offset(), -1);
    assert_eq!(closest.distance(), 1);
    assert!(solved.exact_matches().is_empty());
}

#[test]
fn target_equal_to_a_drawn_number_falls_back_to_its_literal() {
    let solved = solve_round(&[3, 7], 3, RoundConfig::default()).unwrap();
    assert!(solved.closest().is_exact());
    assert_eq!(solved.closest().expression, "3");
}

#[test]
fn tie_break_policy_is_honoured() {
    // {10, 20} reaches 2, 10, 20, 30, 200; target 25 sits between 20
    // and 30.
    let higher = solve_round(
        &[10, 20],
        25,
        RoundConfig {
            tie_break: TieBreak::Higher,
            hint_seed: 0,
        },
    )
    .unwrap();
    assert_eq!(higher.closest().value, 30);

    let lower = solve_round(
        &[10, 20],
        25,
        RoundConfig {
            tie_break: TieBreak::Lower,
            hint_seed: 0,
        },
    )
    .unwrap();
    assert_eq!(lower.closest().value, 20);
}

#[test]
fn classic_six_number_selection_reaches_952() {
    let solved = solve_round(&[25, 50, 75, 100, 3, 6], 952, RoundConfig::default()).unwrap();
    assert!(solved.closest().is_exact(), "952 should be reachable");
    let exact = solved.exact_matches();
    assert!(!exact.is_empty());
    for expr in exact {
        assert_eq!(expr.value(), 952);
    }
}

#[test]
fn round_hints_run_out_after_five() {
    let solved = solve_round(&[1, 2, 3, 4], 10, RoundConfig::default()).unwrap();
    assert_eq!(solved.hints_remaining(), 5);
    for _ in 0..5 {
        assert!(solved.next_hint().is_ok());
    }
    assert_eq!(solved.next_hint(), Err(HintError::Exhausted));
    assert_eq!(solved.hints_remaining(), 0);
}

#[test]
fn spawn_rejects_bad_selections_before_solving() {
    assert!(matches!(
        NumbersJob::spawn(vec![5], 10, RoundConfig::default()),
        Err(RoundError::Input(InputError::BadCount(1)))
    ));
    assert!(matches!(
        NumbersJob::spawn(vec![1; 9], 10, RoundConfig::default()),
        Err(RoundError::Input(InputError::BadCount(9)))
    ));
    assert!(matches!(
        NumbersJob::spawn(vec![4, 0], 10, RoundConfig::default()),
        Err(RoundError::Input(InputError::NonPositive(0)))
    ));
}

#[test]
fn job_publishes_once_and_answers_after_waiting() {
    let job = NumbersJob::spawn(vec![1, 2, 3, 4], 10, RoundConfig::default()).unwrap();

    // The worker may or may not have finished yet; before publication
    // the only valid answer is NotReady.
    if !job.is_ready() {
        assert!(matches!(job.solution(), Err(RoundError::NotReady)));
        assert!(matches!(job.next_hint(), Err(RoundError::NotReady)));
    }

    let solved = job.wait().unwrap();
    assert!(job.is_ready());
    assert!(solved.closest().is_exact());
    assert_eq!(solved.closest().value, 10);

    // Waiting again returns the memoized result.
    let again = job.wait().unwrap();
    assert_eq!(again.closest(), solved.closest());
}

#[test]
fn job_hints_flow_through_to_exhaustion() {
    let job = NumbersJob::spawn(vec![2, 3], 5, RoundConfig::default()).unwrap();
    job.wait().unwrap();
    for _ in 0..5 {
        assert!(job.next_hint().is_ok());
    }
    assert!(matches!(
        job.next_hint(),
        Err(RoundError::Hint(HintError::Exhausted))
    ));
}

#[test]
fn concurrent_rounds_do_not_interfere() {
    let first = NumbersJob::spawn(vec![1, 2, 3, 4], 10, RoundConfig::default()).unwrap();
    let second = NumbersJob::spawn(vec![2, 4], 9, RoundConfig::default()).unwrap();
    assert_eq!(first.wait().unwrap().closest().value, 10);
    assert_eq!(second.wait().unwrap().closest().value, 8);
}
