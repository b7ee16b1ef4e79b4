// src/entity/task.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{blank_date, lenient, new_id};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    #[serde(rename = "Fácil")]
    Easy,
    #[serde(rename = "Media")]
    Medium,
    #[serde(rename = "Difícil")]
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" | "fácil" | "facil" => Ok(Difficulty::Easy),
            "medium" | "media" => Ok(Difficulty::Medium),
            "hard" | "difícil" | "dificil" => Ok(Difficulty::Hard),
            _ => Err(format!("Invalid task difficulty: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    #[serde(rename = "texto")]
    pub text: String,
    #[serde(rename = "nivel", default, deserialize_with = "lenient::deserialize")]
    pub difficulty: Difficulty,
    #[serde(rename = "fecha", default, with = "blank_date")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub done: bool,
}

impl Task {
    pub fn new(text: String, difficulty: Difficulty, due_date: Option<NaiveDate>) -> Self {
        Self {
            id: new_id(),
            text,
            difficulty,
            due_date,
            done: false,
        }
    }
}
