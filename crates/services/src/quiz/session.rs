use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

use slam_core::model::{ChampionTable, Tournament, Year};

use super::check::{CellCheck, CheckOutcome, RevealResult, YearCheck};
use super::progress::QuizStats;
use super::state::YearState;
use crate::error::QuizError;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz session: one `YearState` per season, most recent first.
///
/// Only 2024 is open at the start. Completing a year (all four cells correct,
/// by checking or revealing) opens the year before it. Completion is terminal
/// and at most one year is open for answers at any time.
pub struct QuizSession {
    table: Arc<ChampionTable>,
    years: Vec<YearState>,
    started_at: DateTime<Utc>,
}

impl QuizSession {
    /// Build a fresh session over `table`.
    ///
    /// `started_at` should come from the services layer clock.
    #[must_use]
    pub fn new(table: Arc<ChampionTable>, started_at: DateTime<Utc>) -> Self {
        Self {
            years: initial_years(),
            table,
            started_at,
        }
    }

    /// Throw away all answers and start over from 2024.
    pub fn reset(&mut self, started_at: DateTime<Utc>) {
        self.years = initial_years();
        self.started_at = started_at;
    }

    #[must_use]
    pub fn table(&self) -> &ChampionTable {
        &self.table
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// All years, 2024 first.
    #[must_use]
    pub fn years(&self) -> &[YearState] {
        &self.years
    }

    #[must_use]
    pub fn year(&self, year: Year) -> &YearState {
        &self.years[year_index(year)]
    }

    fn year_mut(&mut self, year: Year) -> &mut YearState {
        &mut self.years[year_index(year)]
    }

    /// The year currently open for answers.
    #[must_use]
    pub fn active_year(&self) -> Option<Year> {
        self.years
            .iter()
            .find(|state| state.is_active())
            .map(YearState::year)
    }

    /// Record `candidate` as the guess for one cell.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::LockedYear` unless `year` is open for answers.
    pub fn select_answer(
        &mut self,
        year: Year,
        tournament: Tournament,
        candidate: &str,
    ) -> Result<(), QuizError> {
        let state = self.year_mut(year);
        if !state.is_active() {
            return Err(QuizError::LockedYear { year });
        }
        state.cell_mut(tournament).select(candidate);
        Ok(())
    }

    /// Grade every answered cell of `year` and complete it when all four match.
    ///
    /// `checked_at` stamps the completion, if one happens.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::LockedYear` if `year` has not been unlocked.
    pub fn check_year(
        &mut self,
        year: Year,
        checked_at: DateTime<Utc>,
    ) -> Result<YearCheck, QuizError> {
        if !self.year(year).is_unlocked() {
            return Err(QuizError::LockedYear { year });
        }

        let mut cells = Vec::with_capacity(Tournament::ALL.len());
        for tournament in Tournament::ALL {
            let champion = self.table.champion(year, tournament).to_owned();
            let outcome = match self.year_mut(year).cell_mut(tournament).check(&champion) {
                Some(true) => CheckOutcome::Correct { champion },
                Some(false) => CheckOutcome::Incorrect,
                None => CheckOutcome::Unanswered,
            };
            cells.push(CellCheck {
                tournament,
                outcome,
            });
        }

        let unlocked = self.evaluate_completion(year, checked_at);
        Ok(YearCheck {
            year,
            cells,
            completed: self.year(year).is_completed(),
            unlocked,
        })
    }

    /// Reveal the first unrevealed cell of `year`, in calendar order.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::LockedYear` if `year` has not been unlocked and
    /// `QuizError::AlreadyRevealed` if every cell is already revealed.
    /// Revealing a completed year only discloses the answers; completion and
    /// unlocks are unaffected.
    pub fn reveal_one(
        &mut self,
        year: Year,
        revealed_at: DateTime<Utc>,
    ) -> Result<RevealResult, QuizError> {
        self.ensure_revealable(year)?;
        let tournament = self
            .year(year)
            .next_unrevealed()
            .ok_or(QuizError::AlreadyRevealed { year })?;

        self.reveal_cell(year, tournament);
        let unlocked = self.evaluate_completion(year, revealed_at);
        Ok(RevealResult {
            year,
            revealed: vec![tournament],
            completed: self.year(year).is_completed(),
            unlocked,
        })
    }

    /// Reveal every remaining cell of `year`.
    ///
    /// # Errors
    ///
    /// Same as `reveal_one`.
    pub fn reveal_all(
        &mut self,
        year: Year,
        revealed_at: DateTime<Utc>,
    ) -> Result<RevealResult, QuizError> {
        self.ensure_revealable(year)?;

        let pending: Vec<Tournament> = self
            .year(year)
            .cells()
            .filter(|(_, cell)| !cell.is_revealed())
            .map(|(tournament, _)| tournament)
            .collect();
        if pending.is_empty() {
            return Err(QuizError::AlreadyRevealed { year });
        }

        for tournament in &pending {
            self.reveal_cell(year, *tournament);
        }
        let unlocked = self.evaluate_completion(year, revealed_at);
        Ok(RevealResult {
            year,
            revealed: pending,
            completed: self.year(year).is_completed(),
            unlocked,
        })
    }

    /// Current progress counters. Does not mutate the session.
    #[must_use]
    pub fn stats(&self) -> QuizStats {
        let active = self.years.iter().find(|state| state.is_active());
        let completed_years = self
            .years
            .iter()
            .filter(|state| state.is_completed())
            .count();
        let finished_at = if completed_years == self.years.len() {
            self.years.iter().filter_map(YearState::completed_at).max()
        } else {
            None
        };

        QuizStats {
            active_year: active.map(YearState::year),
            active_year_correct: active.map_or(0, YearState::correct_count),
            completed_years,
            total_years: self.years.len(),
            started_at: self.started_at,
            finished_at,
        }
    }

    fn ensure_revealable(&self, year: Year) -> Result<(), QuizError> {
        if self.year(year).is_unlocked() {
            Ok(())
        } else {
            Err(QuizError::LockedYear { year })
        }
    }

    fn reveal_cell(&mut self, year: Year, tournament: Tournament) {
        let champion = self.table.champion(year, tournament).to_owned();
        self.year_mut(year).cell_mut(tournament).reveal(&champion);
    }

    /// Complete `year` if all four cells are correct and open the year before.
    ///
    /// Returns the year newly unlocked by this call.
    fn evaluate_completion(&mut self, year: Year, at: DateTime<Utc>) -> Option<Year> {
        let state = self.year_mut(year);
        if !state.all_correct() || !state.complete(at) {
            return None;
        }

        let previous = year.previous()?;
        let previous_state = self.year_mut(previous);
        if previous_state.is_unlocked() {
            return None;
        }
        previous_state.unlock();
        Some(previous)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("active_year", &self.active_year())
            .field("years_len", &self.years.len())
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}

fn initial_years() -> Vec<YearState> {
    Year::all_descending()
        .map(|year| YearState::new(year, year == Year::LAST))
        .collect()
}

fn year_index(year: Year) -> usize {
    usize::from(Year::LAST.value() - year.value())
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
