//! Score computation from checklist results.
//!
//! The store persists whatever score the client submitted. These helpers
//! exist so callers can detect (and log) a score that disagrees with its
//! checklist; nothing here overwrites a stored score.

use crate::entities::{ChecklistResult, Score};

/// Tolerance when comparing submitted and computed totals.
const EPSILON: f64 = 1e-9;

/// `round(100 * achieved / possible)`, or `0` when nothing was possible.
#[must_use]
pub fn percent(achieved: f64, possible: f64) -> f64 {
    if possible > 0.0 {
        (100.0 * achieved / possible).round()
    } else {
        0.0
    }
}

impl Score {
    /// Compute the score implied by a checklist.
    #[must_use]
    pub fn from_checklist(checklist: &[ChecklistResult]) -> Self {
        let total_possible: f64 = checklist.iter().map(|item| item.weight).sum();
        let total_achieved: f64 = checklist
            .iter()
            .filter(|item| item.passed)
            .map(|item| item.weight)
            .sum();
        Self {
            total_achieved,
            total_possible,
            percent: percent(total_achieved, total_possible),
        }
    }

    /// Whether this score matches the one computed from `checklist`.
    #[must_use]
    pub fn agrees_with(&self, checklist: &[ChecklistResult]) -> bool {
        let expected = Self::from_checklist(checklist);
        (self.total_achieved - expected.total_achieved).abs() < EPSILON
            && (self.total_possible - expected.total_possible).abs() < EPSILON
            && (self.percent - expected.percent).abs() < EPSILON
    }
}
