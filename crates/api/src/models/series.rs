use gatcha_core::DbId;
use serde::{Deserialize, Serialize};

/// A grouping of related characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub id: DbId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub unlock_level: i64,
}

/// Writable fields for creating or updating a series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPayload {
    pub name: String,
    pub description: String,
    pub unlock_level: i64,
}
