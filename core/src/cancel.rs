use alloc::rc::Rc;
use core::cell::Cell;

use crate::*;

/// Shared flag telling an in-flight board build to stop at its next suspension point.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }

    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(TriviaError::Cancelled)
        } else {
            Ok(())
        }
    }
}
