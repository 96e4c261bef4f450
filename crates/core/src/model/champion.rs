use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

use crate::model::tournament::Tournament;
use crate::model::year::Year;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Problems detected while assembling the reference table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChampionTableError {
    #[error("no champion recorded for {tournament} {year}")]
    Missing { year: Year, tournament: Tournament },

    #[error("more than one champion recorded for {tournament} {year}")]
    Duplicate { year: Year, tournament: Tournament },

    #[error("empty champion name for {tournament} {year}")]
    EmptyChampion { year: Year, tournament: Tournament },
}

//
// ─── RECORD ────────────────────────────────────────────────────────────────────
//

/// One reference fact: who won `tournament` in `year`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChampionRecord {
    pub year: Year,
    pub tournament: Tournament,
    pub champion: String,
}

impl ChampionRecord {
    #[must_use]
    pub fn new(year: Year, tournament: Tournament, champion: impl Into<String>) -> Self {
        Self {
            year,
            tournament,
            champion: champion.into(),
        }
    }
}

//
// ─── TABLE ─────────────────────────────────────────────────────────────────────
//

/// Immutable year × tournament → champion lookup.
///
/// Construction guarantees complete coverage: every season in the quiz range
/// has exactly one non-empty champion per tournament. A tournament that was not
/// held is stored as a fixed value like any other champion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChampionTable {
    champions: BTreeMap<(Year, Tournament), String>,
}

impl ChampionTable {
    /// Builds the table from loaded records.
    ///
    /// # Errors
    ///
    /// Returns `ChampionTableError::Duplicate` if a pair appears twice,
    /// `ChampionTableError::EmptyChampion` for blank names and
    /// `ChampionTableError::Missing` for the first uncovered pair.
    pub fn from_records(
        records: impl IntoIterator<Item = ChampionRecord>,
    ) -> Result<Self, ChampionTableError> {
        let mut champions = BTreeMap::new();

        for record in records {
            let ChampionRecord {
                year,
                tournament,
                champion,
            } = record;
            let champion = champion.trim().to_owned();
            if champion.is_empty() {
                return Err(ChampionTableError::EmptyChampion { year, tournament });
            }
            if champions.insert((year, tournament), champion).is_some() {
                return Err(ChampionTableError::Duplicate { year, tournament });
            }
        }

        for year in Year::all_descending() {
            for tournament in Tournament::ALL {
                if !champions.contains_key(&(year, tournament)) {
                    return Err(ChampionTableError::Missing { year, tournament });
                }
            }
        }

        Ok(Self { champions })
    }

    /// The reference champion for a pair. Always present once built.
    #[must_use]
    pub fn champion(&self, year: Year, tournament: Tournament) -> &str {
        self.champions
            .get(&(year, tournament))
            .map_or("", String::as_str)
    }

    /// Number of records (always 100 for a valid table).
    #[must_use]
    pub fn len(&self) -> usize {
        self.champions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }

    /// All records, ordered by year then tournament.
    pub fn records(&self) -> impl Iterator<Item = ChampionRecord> + '_ {
        self.champions
            .iter()
            .map(|(&(year, tournament), champion)| ChampionRecord::new(year, tournament, champion))
    }

    /// Distinct champion names, sorted; used to populate answer pickers.
    #[must_use]
    pub fn candidates(&self) -> Vec<String> {
        self.champions
            .values()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Titles per champion, most titles first, ties by name.
    #[must_use]
    pub fn title_counts(&self) -> Vec<(String, usize)> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for champion in self.champions.values() {
            *counts.entry(champion.as_str()).or_default() += 1;
        }
        let mut counts: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(name, count)| (name.to_owned(), count))
            .collect();
        counts.sort_by(|left, right| right.1.cmp(&left.1).then_with(|| left.0.cmp(&right.0)));
        counts
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
