use chrono::{DateTime, Duration, Utc};

use slam_core::model::Year;

/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizStats {
    /// The year currently open for answers; `None` once every year is done.
    pub active_year: Option<Year>,
    /// Correct cells in the active year (0..=4).
    pub active_year_correct: usize,
    pub completed_years: usize,
    pub total_years: usize,
    pub started_at: DateTime<Utc>,
    /// Set when the last year is completed.
    pub finished_at: Option<DateTime<Utc>>,
}

impl QuizStats {
    pub const CELLS_PER_YEAR: usize = 4;

    /// Fraction of the active year answered correctly.
    ///
    /// Reports `1.0` when no year is active because the quiz is finished.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn current_year_progress(&self) -> f32 {
        match self.active_year {
            Some(_) => self.active_year_correct as f32 / Self::CELLS_PER_YEAR as f32,
            None if self.is_finished() => 1.0,
            None => 0.0,
        }
    }

    /// Fraction of years completed.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn overall_progress(&self) -> f32 {
        if self.total_years == 0 {
            return 0.0;
        }
        self.completed_years as f32 / self.total_years as f32
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.total_years > 0 && self.completed_years == self.total_years
    }

    /// Time from session start to the final completion.
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        self.finished_at.map(|at| at - self.started_at)
    }
}
