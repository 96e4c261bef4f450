mod answer;
mod champion;
mod tournament;
mod year;

pub use answer::{answers_match, normalize_answer};
pub use champion::{ChampionRecord, ChampionTable, ChampionTableError};
pub use tournament::{Tournament, TournamentError};
pub use year::{Year, YearError};
