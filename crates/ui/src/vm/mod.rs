mod cell_vm;
mod menu_vm;
mod quiz_vm;
mod time_fmt;

pub use cell_vm::{CellPresentation, CellVm, cell_key, parse_cell_key};
pub use menu_vm::{MenuEntryVm, menu_entries};
pub use quiz_vm::{Notice, QuizIntent, QuizVm, StatsVm, YearRowVm, start_quiz};
pub use time_fmt::format_elapsed;
