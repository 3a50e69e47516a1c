use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use std::thread::{self, JoinHandle};

use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::expression::Expression;
use crate::generator::{self, ExpressionStream};
use crate::hints::{build_hints, HintError, HintQueue};
use crate::round::RoundError;
use crate::solutions::{SolutionIndex, TieBreak};

/// Per-round knobs: the equidistant tie-break policy and the seed for
/// hint representative selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundConfig {
    pub tie_break: TieBreak,
    pub hint_seed: u64,
}

/// Summary of the closest reachable value to the round's target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosestSolution {
    pub target: i64,
    pub value: i64,
    /// Canonical text of the first-generated expression for `value`.
    pub expression: String,
}

impl ClosestSolution {
    pub fn is_exact(&self) -> bool {
        self.value == self.target
    }

    /// Signed distance from the target to the reached value.
    pub fn offset(&self) -> i64 {
        self.value - self.target
    }

    pub fn distance(&self) -> i64 {
        self.offset().abs()
    }
}

/// The fully solved round: the grouped index, the closest-value summary,
/// and the hint queue. Everything but the hint cursor is immutable, so
/// concurrent interactive requests share it freely.
#[derive(Debug)]
pub struct SolvedRound {
    index: SolutionIndex,
    closest: ClosestSolution,
    hints: Mutex<HintQueue>,
}

impl SolvedRound {
    pub fn closest(&self) -> &ClosestSolution {
        &self.closest
    }

    /// The full grouped expression set, for persistence and audit.
    pub fn index(&self) -> &SolutionIndex {
        &self.index
    }

    /// All expressions hitting the target exactly; empty when only a
    /// nearby value is reachable.
    pub fn exact_matches(&self) -> &[Arc<Expression>] {
        self.index.exact_matches(self.closest.target)
    }

    /// Pops the next hint.
    ///
    /// # Errors
    ///
    /// Returns [`HintError::Exhausted`] once all five have been given.
    pub fn next_hint(&self) -> Result<String, HintError> {
        let mut queue = self.hints.lock().unwrap_or_else(PoisonError::into_inner);
        queue.pop_next().map(str::to_owned)
    }

    pub fn hints_remaining(&self) -> usize {
        self.hints
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remaining()
    }
}

/// Solves a round synchronously: generate, index, summarise, build hints.
///
/// # Errors
///
/// Returns an error when the selection fails validation; see
/// [`generator::validate_selection`].
pub fn solve_round(
    numbers: &[i64],
    target: i64,
    config: RoundConfig,
) -> Result<SolvedRound, RoundError> {
    generator::validate_selection(numbers)?;
    let stream = ExpressionStream::new(numbers)?;
    let index: SolutionIndex = stream.collect();
    info!(
        "solved {:?}: {} expressions over {} values",
        numbers,
        index.len(),
        index.values().count()
    );

    let mut rng = SmallRng::seed_from_u64(config.hint_seed);
    let hints = build_hints(&index, target, config.tie_break, &mut rng);

    // A validated selection always yields at least its literals.
    let closest = match index.nearest(target, config.tie_break) {
        Some(nearest) => ClosestSolution {
            target,
            value: nearest.value,
            expression: nearest
                .expressions
                .first()
                .map(|e| e.text().to_string())
                .unwrap_or_default(),
        },
        None => return Err(RoundError::TaskFailed),
    };

    Ok(SolvedRound {
        index,
        closest,
        hints: Mutex::new(hints),
    })
}

/// A numbers round being solved in the background.
///
/// Generation runs to completion on a dedicated worker thread; there is
/// no cancellation. The result is published once and memoized for the
/// lifetime of the job. Queries before publication get
/// [`RoundError::NotReady`] instead of blocking or partial answers.
#[derive(Debug)]
pub struct NumbersJob {
    cell: Arc<OnceLock<Result<SolvedRound, RoundError>>>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl NumbersJob {
    /// Validates the selection and starts solving it for `target` on a
    /// worker thread.
    ///
    /// # Errors
    ///
    /// Returns an input error for a bad selection, or
    /// [`RoundError::TaskFailed`] when the thread cannot be spawned.
    pub fn spawn(numbers: Vec<i64>, target: i64, config: RoundConfig) -> Result<Self, RoundError> {
        generator::validate_selection(&numbers)?;
        info!("solving {:?} for target {} in the background", numbers, target);

        let cell = Arc::new(OnceLock::new());
        let publish = Arc::clone(&cell);
        let worker = thread::Builder::new()
            .name("numbers-solver".into())
            .spawn(move || {
                let solved = solve_round(&numbers, target, config);
                let _ = publish.set(solved);
            })
            .map_err(|_| RoundError::TaskFailed)?;

        Ok(Self {
            cell,
            worker: Mutex::new(Some(worker)),
        })
    }

    /// Whether generation has finished and queries may be answered.
    pub fn is_ready(&self) -> bool {
        self.cell.get().is_some()
    }

    /// The solved round.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::NotReady`] while the worker is still
    /// running; callers are expected to retry later.
    pub fn solution(&self) -> Result<&SolvedRound, RoundError> {
        match self.cell.get() {
            None => Err(RoundError::NotReady),
            Some(Ok(solved)) => Ok(solved),
            Some(Err(err)) => Err(err.clone()),
        }
    }

    /// Blocks until the worker finishes, then returns the solved round.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::TaskFailed`] if the worker panicked.
    pub fn wait(&self) -> Result<&SolvedRound, RoundError> {
        let handle = self
            .worker
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = handle {
            handle.join().map_err(|_| RoundError::TaskFailed)?;
        }
        self.solution()
    }

    /// Pops the next hint; requires a finished round.
    ///
    /// # Errors
    ///
    /// [`RoundError::NotReady`] before completion,
    /// [`RoundError::Hint`] once the hints are exhausted.
    pub fn next_hint(&self) -> Result<String, RoundError> {
        let solved = self.solution()?;
        Ok(solved.next_hint()?)
    }
}
