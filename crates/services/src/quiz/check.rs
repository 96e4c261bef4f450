use slam_core::model::{Tournament, Year};

/// Outcome of checking one cell.
///
/// The champion is only carried for correct guesses; a wrong guess reports
/// nothing beyond the fact that it was wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Correct { champion: String },
    Incorrect,
    Unanswered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellCheck {
    pub tournament: Tournament,
    pub outcome: CheckOutcome,
}

impl CellCheck {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self.outcome, CheckOutcome::Correct { .. })
    }

    #[must_use]
    pub fn correct_answer(&self) -> Option<&str> {
        match &self.outcome {
            CheckOutcome::Correct { champion } => Some(champion),
            CheckOutcome::Incorrect | CheckOutcome::Unanswered => None,
        }
    }
}

/// Result of `QuizSession::check_year`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearCheck {
    pub year: Year,
    /// One entry per tournament, calendar order.
    pub cells: Vec<CellCheck>,
    /// Whether the year is completed after this check.
    pub completed: bool,
    /// Year unlocked as a consequence of this call, if any.
    pub unlocked: Option<Year>,
}

impl YearCheck {
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_correct()).count()
    }
}

/// Result of a reveal request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealResult {
    pub year: Year,
    /// Tournaments revealed by this call, calendar order.
    pub revealed: Vec<Tournament>,
    pub completed: bool,
    pub unlocked: Option<Year>,
}
