use slam_core::model::ChampionRecord;
use std::sync::Arc;
use thiserror::Error;

use crate::json::JsonRepository;

/// Errors surfaced by reference-data adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Source of the champion reference table.
///
/// Implementations return raw records; coverage is validated by
/// `ChampionTable::from_records` in the caller.
pub trait ChampionRepository: Send + Sync {
    /// Load every champion record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing data cannot be decoded.
    fn load_champions(&self) -> Result<Vec<ChampionRecord>, StorageError>;
}

/// Fixed record list, used by tests to feed incomplete or custom tables.
#[derive(Clone, Debug, Default)]
pub struct InMemoryRepository {
    records: Vec<ChampionRecord>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_records(records: Vec<ChampionRecord>) -> Self {
        Self { records }
    }
}

impl ChampionRepository for InMemoryRepository {
    fn load_champions(&self) -> Result<Vec<ChampionRecord>, StorageError> {
        Ok(self.records.clone())
    }
}

/// Bundles repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub champions: Arc<dyn ChampionRepository>,
}

impl Storage {
    /// Storage backed by the champion table compiled into the binary.
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            champions: Arc::new(JsonRepository::embedded()),
        }
    }

    #[must_use]
    pub fn in_memory(repo: InMemoryRepository) -> Self {
        Self {
            champions: Arc::new(repo),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slam_core::model::{Tournament, Year};

    #[test]
    fn empty_repository_loads_nothing() {
        assert!(InMemoryRepository::new().load_champions().unwrap().is_empty());
    }

    #[test]
    fn in_memory_storage_returns_given_records() {
        let repo = InMemoryRepository::with_records(vec![
            ChampionRecord::new(Year::FIRST, Tournament::AustralianOpen, "Andre Agassi"),
            ChampionRecord::new(Year::FIRST, Tournament::RolandGarros, "Gustavo Kuerten"),
        ]);
        let storage = Storage::in_memory(repo);

        let records = storage.champions.load_champions().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].champion, "Gustavo Kuerten");
    }
}
