// src/entity/note.rs
use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::new_id;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    #[serde(rename = "texto")]
    pub text: String,
    /// Creation time in epoch milliseconds
    #[serde(rename = "ts")]
    pub created_at: i64,
}

impl Note {
    pub fn new(text: String) -> Self {
        Self {
            id: new_id(),
            text,
            created_at: Utc::now().timestamp_millis(),
        }
    }
}
