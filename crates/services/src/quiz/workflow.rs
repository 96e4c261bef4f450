use std::sync::{Arc, OnceLock};

use slam_core::model::{ChampionTable, Tournament, Year};
use storage::ChampionRepository;
use tracing::{debug, info, warn};

use super::check::{RevealResult, YearCheck};
use super::session::QuizSession;
use crate::Clock;
use crate::error::QuizError;

/// Orchestrates session start and timestamped quiz operations.
///
/// Owns the time source and the reference-data repository; the session itself
/// stays with the caller. The champion table is loaded on first use and shared
/// by every session started afterwards.
#[derive(Clone)]
pub struct QuizService {
    clock: Clock,
    champions: Arc<dyn ChampionRepository>,
    table: Arc<OnceLock<Arc<ChampionTable>>>,
}

impl QuizService {
    #[must_use]
    pub fn new(clock: Clock, champions: Arc<dyn ChampionRepository>) -> Self {
        Self {
            clock,
            champions,
            table: Arc::new(OnceLock::new()),
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Load and validate the champion table.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Storage` if the repository fails and
    /// `QuizError::Table` if the records do not cover every pair exactly once.
    pub fn champion_table(&self) -> Result<Arc<ChampionTable>, QuizError> {
        if let Some(table) = self.table.get() {
            return Ok(Arc::clone(table));
        }

        let records = self.champions.load_champions()?;
        let table = Arc::new(ChampionTable::from_records(records)?);
        debug!(records = table.len(), "champion table loaded");
        Ok(Arc::clone(self.table.get_or_init(|| table)))
    }

    /// Start a new session with only the most recent year unlocked.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` if the champion table cannot be loaded.
    pub fn start_session(&self) -> Result<QuizSession, QuizError> {
        let table = self.champion_table()?;
        let now = self.clock.now();
        info!(started_at = %now, "quiz session started");
        Ok(QuizSession::new(table, now))
    }

    /// Discard all progress in `session`.
    pub fn reset(&self, session: &mut QuizSession) {
        let now = self.clock.now();
        session.reset(now);
        info!(started_at = %now, "quiz session reset");
    }

    /// # Errors
    ///
    /// See `QuizSession::select_answer`.
    pub fn select_answer(
        &self,
        session: &mut QuizSession,
        year: Year,
        tournament: Tournament,
        candidate: &str,
    ) -> Result<(), QuizError> {
        session
            .select_answer(year, tournament, candidate)
            .inspect_err(|err| warn!(%year, tournament = tournament.code(), %err, "selection rejected"))
    }

    /// # Errors
    ///
    /// See `QuizSession::check_year`.
    pub fn check_year(
        &self,
        session: &mut QuizSession,
        year: Year,
    ) -> Result<YearCheck, QuizError> {
        let check = session
            .check_year(year, self.clock.now())
            .inspect_err(|err| warn!(%year, %err, "check rejected"))?;
        debug!(%year, correct = check.correct_count(), "year checked");
        log_progress(year, check.completed, check.unlocked);
        Ok(check)
    }

    /// # Errors
    ///
    /// See `QuizSession::reveal_one`.
    pub fn reveal_one(
        &self,
        session: &mut QuizSession,
        year: Year,
    ) -> Result<RevealResult, QuizError> {
        let result = session
            .reveal_one(year, self.clock.now())
            .inspect_err(|err| warn!(%year, %err, "reveal rejected"))?;
        debug!(%year, revealed = ?result.revealed, "hint revealed");
        log_progress(year, result.completed, result.unlocked);
        Ok(result)
    }

    /// # Errors
    ///
    /// See `QuizSession::reveal_all`.
    pub fn reveal_all(
        &self,
        session: &mut QuizSession,
        year: Year,
    ) -> Result<RevealResult, QuizError> {
        let result = session
            .reveal_all(year, self.clock.now())
            .inspect_err(|err| warn!(%year, %err, "reveal rejected"))?;
        debug!(%year, revealed = ?result.revealed, "year revealed");
        log_progress(year, result.completed, result.unlocked);
        Ok(result)
    }
}

fn log_progress(year: Year, completed: bool, unlocked: Option<Year>) {
    if let Some(next) = unlocked {
        info!(%year, unlocked = %next, "year completed");
    } else if completed && year == Year::FIRST {
        info!(%year, "final year completed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slam_core::time::{fixed_clock, fixed_now};
    use storage::{InMemoryRepository, JsonRepository};

    fn service() -> QuizService {
        QuizService::new(fixed_clock(), Arc::new(JsonRepository::embedded()))
    }

    #[test]
    fn start_session_uses_clock() {
        let session = service().start_session().unwrap();
        assert_eq!(session.started_at(), fixed_now());
        assert_eq!(session.active_year(), Some(Year::LAST));
    }

    #[test]
    fn table_is_loaded_once_and_shared() {
        let svc = service();
        let first = svc.champion_table().unwrap();
        let second = svc.clone().champion_table().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn incomplete_data_fails_to_start() {
        let svc = QuizService::new(fixed_clock(), Arc::new(InMemoryRepository::new()));
        let err = svc.start_session().unwrap_err();
        assert!(matches!(err, QuizError::Table(_)));
    }

    #[test]
    fn broken_json_surfaces_storage_error() {
        let svc = QuizService::new(fixed_clock(), Arc::new(JsonRepository::from_json("{")));
        let err = svc.start_session().unwrap_err();
        assert!(matches!(err, QuizError::Storage(_)));
    }

    #[test]
    fn check_stamps_completion_with_clock() {
        let svc = service();
        let mut session = svc.start_session().unwrap();
        let result = svc.reveal_all(&mut session, Year::LAST).unwrap();
        assert!(result.completed);
        assert_eq!(session.year(Year::LAST).completed_at(), Some(fixed_now()));
    }

    #[test]
    fn reset_reopens_latest_year() {
        let svc = service();
        let mut session = svc.start_session().unwrap();
        svc.reveal_all(&mut session, Year::LAST).unwrap();
        svc.reset(&mut session);
        assert_eq!(session.active_year(), Some(Year::LAST));
        assert_eq!(session.stats().completed_years, 0);
    }
}
