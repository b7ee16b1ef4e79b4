// src/entity/document.rs
use serde::{Deserialize, Serialize};

use super::{Difficulty, Goal, GoalCategory, Note, Profile, Resource, Session, Task};

/// The whole persisted state: one profile and five ordered lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "perfil", default)]
    pub profile: Profile,
    #[serde(rename = "metas", default)]
    pub goals: Vec<Goal>,
    #[serde(rename = "tareas", default)]
    pub tasks: Vec<Task>,
    #[serde(rename = "sesiones", default)]
    pub sessions: Vec<Session>,
    #[serde(rename = "recursos", default)]
    pub resources: Vec<Resource>,
    #[serde(rename = "notas", default)]
    pub notes: Vec<Note>,
}

impl Document {
    /// First-run document: default profile, two example goals and one task.
    pub fn seed() -> Self {
        Self {
            profile: Profile::default(),
            goals: vec![
                Goal::new(
                    "Identificar fracciones equivalentes".to_string(),
                    GoalCategory::Short,
                    None,
                ),
                Goal::new(
                    "Resolver sumas y restas con fracciones".to_string(),
                    GoalCategory::Medium,
                    None,
                ),
            ],
            tasks: vec![Task::new(
                "Fichas pág. 12-13".to_string(),
                Difficulty::Easy,
                None,
            )],
            sessions: Vec::new(),
            resources: Vec::new(),
            notes: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_contents() {
        let doc = Document::seed();
        assert_eq!(doc.profile, Profile::default());
        assert_eq!(doc.goals.len(), 2);
        assert_eq!(doc.goals[0].category, GoalCategory::Short);
        assert_eq!(doc.goals[1].category, GoalCategory::Medium);
        assert_eq!(doc.tasks.len(), 1);
        assert_eq!(doc.tasks[0].difficulty, Difficulty::Easy);
        assert!(doc.sessions.is_empty());
        assert!(doc.resources.is_empty());
        assert!(doc.notes.is_empty());
    }

    #[test]
    fn test_seed_ids_are_fresh() {
        let a = Document::seed();
        let b = Document::seed();
        assert_ne!(a.goals[0].id, b.goals[0].id);
        assert_ne!(a.goals[0].id, a.goals[1].id);
    }

    #[test]
    fn test_top_level_member_names() {
        let json = serde_json::to_value(Document::seed()).unwrap();
        for key in ["perfil", "metas", "tareas", "sesiones", "recursos", "notas"] {
            assert!(json.get(key).is_some(), "missing member {}", key);
        }
    }
}
