use std::borrow::Cow;

use slam_core::model::ChampionRecord;

use crate::repository::{ChampionRepository, StorageError};

const EMBEDDED_CHAMPIONS: &str = include_str!("../data/champions.json");

/// Reads champion records from a JSON array of
/// `{ "year": u16, "tournament": "AO" | "RG" | "WB" | "US", "champion": string }`.
#[derive(Debug, Clone)]
pub struct JsonRepository {
    source: Cow<'static, str>,
}

impl JsonRepository {
    /// The men's singles champions 2000-2024 shipped with the crate.
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            source: Cow::Borrowed(EMBEDDED_CHAMPIONS),
        }
    }

    #[must_use]
    pub fn from_json(source: impl Into<String>) -> Self {
        Self {
            source: Cow::Owned(source.into()),
        }
    }
}

impl ChampionRepository for JsonRepository {
    fn load_champions(&self) -> Result<Vec<ChampionRecord>, StorageError> {
        serde_json::from_str(&self.source).map_err(|e| StorageError::Serialization(e.to_string()))
    }
}
