mod document;
mod goal;
mod note;
mod profile;
mod resource;
mod session;
mod task;

pub use document::Document;
pub use goal::{Goal, GoalCategory};
pub use note::Note;
pub use profile::{Profile, ProfileUpdate, PLACEHOLDER_STUDENT};
pub use resource::Resource;
pub use session::{sort_sessions, Session};
pub use task::{Difficulty, Task};

use uuid::Uuid;

/// Fresh identifier for a list item. Stored ids are plain strings, so records
/// written by hand or by older exports keep whatever id they already carry.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Trim a required text field, returning `None` when nothing is left
pub fn required_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Trim an optional text field; blank input is treated as absent
pub fn optional_text(raw: Option<&str>) -> Option<String> {
    raw.and_then(required_text)
}

/// Dates stored as ISO `YYYY-MM-DD` strings, with `""` meaning "no date".
pub(crate) mod blank_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format(FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => match NaiveDate::parse_from_str(s, FORMAT) {
                Ok(date) => Ok(Some(date)),
                Err(e) => {
                    tracing::warn!(value = s, error = %e, "unreadable stored date, dropping it");
                    Ok(None)
                }
            },
        }
    }
}

/// Enum fields read through `FromStr`; anything unrecognized falls back to
/// the default variant instead of failing the whole document.
pub(crate) mod lenient {
    use std::fmt::Display;
    use std::str::FromStr;

    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr + Default,
        T::Err: Display,
    {
        let raw = Value::deserialize(deserializer)?;
        let parsed = match &raw {
            Value::Null => return Ok(T::default()),
            Value::String(s) => s.trim().parse::<T>().map_err(|e| e.to_string()),
            other => Err(format!("unexpected value {}", other)),
        };
        Ok(parsed.unwrap_or_else(|error| {
            tracing::warn!(%error, "unrecognized stored value, using the default");
            T::default()
        }))
    }
}

/// Optional strings stored as `""` when absent.
pub(crate) mod blank_string {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.filter(|s| !s.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_trims() {
        assert_eq!(required_text("  Fractions  "), Some("Fractions".to_string()));
        assert_eq!(required_text("   "), None);
        assert_eq!(required_text(""), None);
    }

    #[test]
    fn test_optional_text_blank_is_absent() {
        assert_eq!(optional_text(None), None);
        assert_eq!(optional_text(Some(" \t")), None);
        assert_eq!(
            optional_text(Some(" https://example.org ")),
            Some("https://example.org".to_string())
        );
    }

    #[test]
    fn test_new_id_is_unique() {
        let id = new_id();
        assert_ne!(id, new_id());
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
