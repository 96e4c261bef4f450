use chrono::{DateTime, Utc};

use slam_core::model::{Tournament, Year, answers_match};

//
// ─── CELL ──────────────────────────────────────────────────────────────────────
//

/// Answer state for one (year, tournament) cell.
///
/// `correct` stays `None` until the cell is checked with a selection in place;
/// a reveal always leaves it `Some(true)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellState {
    selection: Option<String>,
    revealed: bool,
    correct: Option<bool>,
}

impl CellState {
    #[must_use]
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn correct(&self) -> Option<bool> {
        self.correct
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.correct == Some(true)
    }

    /// Replace the selection. Any earlier check or reveal no longer applies.
    pub(crate) fn select(&mut self, candidate: &str) {
        let candidate = candidate.trim();
        self.selection = (!candidate.is_empty()).then(|| candidate.to_owned());
        self.revealed = false;
        self.correct = None;
    }

    /// Grade the current selection against `champion`.
    pub(crate) fn check(&mut self, champion: &str) -> Option<bool> {
        if let Some(selection) = self.selection.as_deref() {
            self.correct = Some(answers_match(selection, champion));
        }
        self.correct
    }

    pub(crate) fn reveal(&mut self, champion: &str) {
        self.selection = Some(champion.to_owned());
        self.revealed = true;
        self.correct = Some(true);
    }
}

//
// ─── YEAR ──────────────────────────────────────────────────────────────────────
//

/// Lifecycle of a season in the quiz: `Locked → Active → Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearStatus {
    Locked,
    Active,
    Completed,
}

/// Mutable state for one season: four cells plus unlock/completion flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearState {
    year: Year,
    cells: [CellState; 4],
    unlocked: bool,
    completed: bool,
    completed_at: Option<DateTime<Utc>>,
}

impl YearState {
    pub(crate) fn new(year: Year, unlocked: bool) -> Self {
        Self {
            year,
            cells: Default::default(),
            unlocked,
            completed: false,
            completed_at: None,
        }
    }

    #[must_use]
    pub fn year(&self) -> Year {
        self.year
    }

    #[must_use]
    pub fn cell(&self, tournament: Tournament) -> &CellState {
        &self.cells[tournament.index()]
    }

    pub(crate) fn cell_mut(&mut self, tournament: Tournament) -> &mut CellState {
        &mut self.cells[tournament.index()]
    }

    /// Cells in calendar order.
    pub fn cells(&self) -> impl Iterator<Item = (Tournament, &CellState)> {
        Tournament::ALL.into_iter().zip(self.cells.iter())
    }

    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Unlocked and still open for answers.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.unlocked && !self.completed
    }

    #[must_use]
    pub fn status(&self) -> YearStatus {
        match (self.unlocked, self.completed) {
            (_, true) => YearStatus::Completed,
            (true, false) => YearStatus::Active,
            (false, false) => YearStatus::Locked,
        }
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Number of cells currently marked correct (0..=4).
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_correct()).count()
    }

    #[must_use]
    pub fn all_correct(&self) -> bool {
        self.cells.iter().all(CellState::is_correct)
    }

    /// First unrevealed tournament in calendar order.
    #[must_use]
    pub fn next_unrevealed(&self) -> Option<Tournament> {
        self.cells()
            .find(|(_, cell)| !cell.is_revealed())
            .map(|(tournament, _)| tournament)
    }

    pub(crate) fn unlock(&mut self) {
        self.unlocked = true;
    }

    /// Mark the year completed. Returns false if it already was.
    pub(crate) fn complete(&mut self, at: DateTime<Utc>) -> bool {
        if self.completed {
            return false;
        }
        self.completed = true;
        self.completed_at = Some(at);
        true
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
