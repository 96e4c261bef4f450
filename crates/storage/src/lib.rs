#![forbid(unsafe_code)]

pub mod json;
pub mod repository;

pub use json::JsonRepository;
pub use repository::{ChampionRepository, InMemoryRepository, Storage, StorageError};
