// src/entity/profile.rs
use serde::{Deserialize, Serialize};

/// Stored in place of a blank student name
pub const PLACEHOLDER_STUDENT: &str = "Alumno/a";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "alumnoNombre", default)]
    pub student_name: String,
    #[serde(rename = "alumnoCurso", default)]
    pub course_label: String,
    #[serde(rename = "mentorNombre", default)]
    pub mentor_name: String,
    #[serde(rename = "alumnoNivel", default)]
    pub student_level: String,
    #[serde(rename = "observaciones", default)]
    pub observations: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            student_name: PLACEHOLDER_STUDENT.to_string(),
            course_label: "Curso de reforzamiento".to_string(),
            mentor_name: "Profesor/a".to_string(),
            student_level: String::new(),
            observations: String::new(),
        }
    }
}

/// Replacement values for the profile form.
///
/// Every field is replaced on save; `None` keeps the current value so the
/// CLI can change one field at a time.
#[derive(Debug, Default)]
pub struct ProfileUpdate {
    pub student_name: Option<String>,
    pub course_label: Option<String>,
    pub mentor_name: Option<String>,
    pub student_level: Option<String>,
    pub observations: Option<String>,
}

impl Profile {
    /// Apply an update, trimming every field. A blank student name falls back
    /// to [`PLACEHOLDER_STUDENT`].
    pub fn apply(&mut self, update: ProfileUpdate) {
        let pick = |new: Option<String>, old: &str| -> String {
            new.as_deref().unwrap_or(old).trim().to_string()
        };

        let student = pick(update.student_name, &self.student_name);
        self.student_name = if student.is_empty() {
            PLACEHOLDER_STUDENT.to_string()
        } else {
            student
        };
        self.course_label = pick(update.course_label, &self.course_label);
        self.mentor_name = pick(update.mentor_name, &self.mentor_name);
        self.student_level = pick(update.student_level, &self.student_level);
        self.observations = pick(update.observations, &self.observations);
    }
}
