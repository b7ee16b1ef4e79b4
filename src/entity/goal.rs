// src/entity/goal.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{blank_date, lenient, new_id};

/// Time horizon of a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GoalCategory {
    #[default]
    #[serde(rename = "corto")]
    Short,
    #[serde(rename = "medio")]
    Medium,
    #[serde(rename = "largo")]
    Long,
}

impl std::fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GoalCategory::Short => write!(f, "short-term"),
            GoalCategory::Medium => write!(f, "medium-term"),
            GoalCategory::Long => write!(f, "long-term"),
        }
    }
}

impl std::str::FromStr for GoalCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "short" | "short-term" | "corto" => Ok(GoalCategory::Short),
            "medium" | "medium-term" | "medio" => Ok(GoalCategory::Medium),
            "long" | "long-term" | "largo" => Ok(GoalCategory::Long),
            _ => Err(format!("Invalid goal category: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    #[serde(rename = "texto")]
    pub text: String,
    #[serde(rename = "tipo", default, deserialize_with = "lenient::deserialize")]
    pub category: GoalCategory,
    #[serde(rename = "fecha", default, with = "blank_date")]
    pub target_date: Option<NaiveDate>,
    #[serde(default)]
    pub done: bool,
}

impl Goal {
    pub fn new(text: String, category: GoalCategory, target_date: Option<NaiveDate>) -> Self {
        Self {
            id: new_id(),
            text,
            category,
            target_date,
            done: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!("short".parse::<GoalCategory>(), Ok(GoalCategory::Short));
        assert_eq!("Medium-Term".parse::<GoalCategory>(), Ok(GoalCategory::Medium));
        assert_eq!("largo".parse::<GoalCategory>(), Ok(GoalCategory::Long));
        assert!("someday".parse::<GoalCategory>().is_err());
    }

    #[test]
    fn test_goal_reads_stored_shape() {
        let json = r#"{"id":"6f1f0c7e-2b7a-4c53-9a51-2c1f9a3c8e11","texto":"Leer 20 minutos","tipo":"largo","fecha":"","done":true}"#;
        let goal: Goal = serde_json::from_str(json).unwrap();
        assert_eq!(goal.text, "Leer 20 minutos");
        assert_eq!(goal.category, GoalCategory::Long);
        assert_eq!(goal.target_date, None);
        assert!(goal.done);
    }

    #[test]
    fn test_goal_keeps_foreign_id_and_tolerates_unknown_category() {
        let json = r#"{"id":"m-1","texto":"Mi meta real","tipo":"trimestral","fecha":"pronto","done":false}"#;
        let goal: Goal = serde_json::from_str(json).unwrap();
        assert_eq!(goal.id, "m-1");
        assert_eq!(goal.text, "Mi meta real");
        assert_eq!(goal.category, GoalCategory::Short);
        assert_eq!(goal.target_date, None);

        let json = r#"{"id":"m-2","texto":"Sin tipo","tipo":null}"#;
        let goal: Goal = serde_json::from_str(json).unwrap();
        assert_eq!(goal.category, GoalCategory::Short);
    }

    #[test]
    fn test_goal_writes_blank_date() {
        let goal = Goal::new("Tablas del 7".to_string(), GoalCategory::Short, None);
        let json = serde_json::to_value(&goal).unwrap();
        assert_eq!(json["fecha"], "");
        assert_eq!(json["tipo"], "corto");

        let dated = Goal::new(
            "Tablas del 8".to_string(),
            GoalCategory::Medium,
            NaiveDate::from_ymd_opt(2024, 6, 1),
        );
        let json = serde_json::to_value(&dated).unwrap();
        assert_eq!(json["fecha"], "2024-06-01");
    }
}
