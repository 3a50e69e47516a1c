use crate::hints::errors::HintError;

/// The round's hint strings, revealed strictly front to back.
///
/// Built once after the round is solved; the cursor is the only mutable
/// state. Requests past the end report exhaustion rather than repeating
/// or wrapping around.
#[derive(Debug)]
pub struct HintQueue {
    hints: Vec<String>,
    cursor: usize,
}

impl HintQueue {
    pub(crate) fn new(hints: Vec<String>) -> Self {
        Self { hints, cursor: 0 }
    }

    /// Reveals the next hint.
    ///
    /// # Errors
    ///
    /// Returns [`HintError::Exhausted`] once every hint has been given.
    pub fn pop_next(&mut self) -> Result<&str, HintError> {
        let hint = self.hints.get(self.cursor).ok_or(HintError::Exhausted)?;
        self.cursor += 1;
        Ok(hint)
    }

    pub fn remaining(&self) -> usize {
        self.hints.len() - self.cursor
    }

    pub fn len(&self) -> usize {
        self.hints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }
}
