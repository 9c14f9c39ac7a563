//! Cooperative cancellation for the scoring time budget

use crate::error::{AtsScorerError, Result};
use std::time::{Duration, Instant};

/// Lightweight deadline token threaded through each pipeline stage.
///
/// The stages are not naturally interruptible mid-loop, so the budget is
/// best-effort: each stage calls `check` at the top of its per-line or
/// per-keyword iteration to bound worst-case overrun.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    expires_at: Option<Instant>,
}

impl Deadline {
    pub fn new(budget: Duration) -> Self {
        Self {
            expires_at: Some(Instant::now() + budget),
        }
    }

    /// A deadline that never expires, for callers without a time budget.
    pub fn none() -> Self {
        Self { expires_at: None }
    }

    pub fn expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Instant::now() >= at)
    }

    pub fn check(&self, stage: &str) -> Result<()> {
        if self.expired() {
            Err(AtsScorerError::Timeout(format!(
                "deadline exceeded during {}",
                stage
            )))
        } else {
            Ok(())
        }
    }
}
