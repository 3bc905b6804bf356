//! Editable state for the series create/edit dialog.

use gatcha_api::models::{Series, SeriesPayload};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesForm {
    pub name: String,
    pub description: String,
    pub unlock_level: i64,
}

impl Default for SeriesForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            unlock_level: 1,
        }
    }
}

impl SeriesForm {
    pub fn from_series(series: &Series) -> Self {
        Self {
            name: series.name.clone(),
            description: series.description.clone(),
            unlock_level: series.unlock_level,
        }
    }

    pub fn to_payload(&self) -> SeriesPayload {
        SeriesPayload {
            name: self.name.clone(),
            description: self.description.clone(),
            unlock_level: self.unlock_level,
        }
    }
}
