use services::{QuizService, QuizSession, QuizStats, YearState, YearStatus};
use slam_core::model::{Tournament, Year};

use crate::views::ViewError;
use crate::vm::cell_vm::{CellVm, parse_cell_key};
use crate::vm::time_fmt::format_elapsed;

/// User events sent back from the quiz page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select {
        year: Year,
        tournament: Tournament,
        candidate: String,
    },
    Check(Year),
    RevealOne(Year),
    RevealAll(Year),
    Reset,
}

impl QuizIntent {
    /// Build a selection intent from a DOM cell key like `2024-AO`.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::UnknownYear`/`UnknownTournament` for bad keys.
    pub fn select_by_key(key: &str, candidate: impl Into<String>) -> Result<Self, ViewError> {
        let (year, tournament) = parse_cell_key(key)?;
        Ok(Self::Select {
            year,
            tournament,
            candidate: candidate.into(),
        })
    }
}

/// Banner shown above the tables after an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(ViewError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YearRowVm {
    pub year: Year,
    pub status: YearStatus,
    pub status_label: &'static str,
    pub can_answer: bool,
    pub cells: Vec<CellVm>,
}

impl YearRowVm {
    #[must_use]
    pub fn from_state(state: &YearState) -> Self {
        let status = state.status();
        let status_label = match status {
            YearStatus::Locked => "Locked",
            YearStatus::Active => "In progress",
            YearStatus::Completed => "Completed",
        };
        Self {
            year: state.year(),
            status,
            status_label,
            can_answer: status == YearStatus::Active,
            cells: state
                .cells()
                .map(|(tournament, cell)| CellVm::new(state.year(), tournament, cell))
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsVm {
    pub current_label: String,
    pub overall_label: String,
    pub completed_years: usize,
    pub total_years: usize,
    pub finished_label: Option<String>,
}

impl From<&QuizStats> for StatsVm {
    fn from(stats: &QuizStats) -> Self {
        let current_label = match stats.active_year {
            Some(year) => format!(
                "{year}: {}/{} correct",
                stats.active_year_correct,
                QuizStats::CELLS_PER_YEAR
            ),
            None => "All years done".to_string(),
        };
        let overall_label = format!(
            "{}/{} years completed",
            stats.completed_years, stats.total_years
        );
        let finished_label = stats
            .elapsed()
            .map(|elapsed| format!("Quiz finished in {}", format_elapsed(elapsed)));

        Self {
            current_label,
            overall_label,
            completed_years: stats.completed_years,
            total_years: stats.total_years,
            finished_label,
        }
    }
}

/// Owns the running session for the quiz page.
pub struct QuizVm {
    session: QuizSession,
    notice: Option<Notice>,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self {
            session,
            notice: None,
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    #[must_use]
    pub fn rows(&self) -> Vec<YearRowVm> {
        self.session
            .years()
            .iter()
            .map(YearRowVm::from_state)
            .collect()
    }

    #[must_use]
    pub fn stats(&self) -> StatsVm {
        StatsVm::from(&self.session.stats())
    }

    #[must_use]
    pub fn candidates(&self) -> Vec<String> {
        self.session.table().candidates()
    }

    /// Apply a user event. On failure nothing changes except the notice.
    ///
    /// # Errors
    ///
    /// Returns the `ViewError` that was also stored as the notice.
    pub fn apply(&mut self, service: &QuizService, intent: QuizIntent) -> Result<(), ViewError> {
        let outcome = self.dispatch(service, intent);
        self.notice = match &outcome {
            Ok(Some(message)) => Some(Notice::Info(message.clone())),
            Ok(None) => None,
            Err(err) => Some(Notice::Error(*err)),
        };
        outcome.map(|_| ())
    }

    /// Surface an event that never reached the session, e.g. a bad cell key.
    pub fn reject(&mut self, err: ViewError) {
        self.notice = Some(Notice::Error(err));
    }

    fn dispatch(
        &mut self,
        service: &QuizService,
        intent: QuizIntent,
    ) -> Result<Option<String>, ViewError> {
        let session = &mut self.session;
        match intent {
            QuizIntent::Select {
                year,
                tournament,
                candidate,
            } => {
                service.select_answer(session, year, tournament, &candidate)?;
                Ok(None)
            }
            QuizIntent::Check(year) => {
                let check = service.check_year(session, year)?;
                Ok(Some(progress_message(
                    year,
                    check.completed,
                    check.unlocked,
                    format!(
                        "{year}: {}/{} correct.",
                        check.correct_count(),
                        check.cells.len()
                    ),
                )))
            }
            QuizIntent::RevealOne(year) => {
                let result = service.reveal_one(session, year)?;
                let names = result
                    .revealed
                    .iter()
                    .map(|t| t.display_name())
                    .collect::<Vec<_>>()
                    .join(", ");
                Ok(Some(progress_message(
                    year,
                    result.completed,
                    result.unlocked,
                    format!("Hint: {names} {year} revealed."),
                )))
            }
            QuizIntent::RevealAll(year) => {
                let result = service.reveal_all(session, year)?;
                Ok(Some(progress_message(
                    year,
                    result.completed,
                    result.unlocked,
                    format!("All {year} champions revealed."),
                )))
            }
            QuizIntent::Reset => {
                service.reset(session);
                Ok(Some("Quiz reset. Start again from 2024.".to_string()))
            }
        }
    }
}

fn progress_message(year: Year, completed: bool, unlocked: Option<Year>, base: String) -> String {
    match (completed, unlocked) {
        (true, Some(next)) => format!("{year} complete! {next} is now unlocked."),
        (true, None) if year == Year::FIRST => "Every year complete!".to_string(),
        _ => base,
    }
}

/// # Errors
///
/// Returns `ViewError::DataUnavailable` when the champion table cannot be loaded.
pub fn start_quiz(service: &QuizService) -> Result<QuizVm, ViewError> {
    service.start_session().map(QuizVm::new).map_err(ViewError::from)
}
