use serde::{Deserialize, Serialize};

/// One archived movie, as persisted in the JSON store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieRecord {
    pub id: String,
    pub title: String,
    pub year: u32,
    pub directors: Vec<String>,
    pub poster: String,
    pub plot: String,
}
