// src/entity/resource.rs
use serde::{Deserialize, Serialize};

use super::{blank_string, new_id};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    #[serde(rename = "titulo")]
    pub title: String,
    /// Outbound link, if any
    #[serde(default, with = "blank_string")]
    pub url: Option<String>,
}

impl Resource {
    pub fn new(title: String, url: Option<String>) -> Self {
        Self {
            id: new_id(),
            title,
            url,
        }
    }
}
