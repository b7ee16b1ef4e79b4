// src/entity/session.rs
use serde::{Deserialize, Serialize};

use super::{blank_string, new_id};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    /// ISO calendar date (`YYYY-MM-DD`)
    #[serde(rename = "fecha", default, with = "blank_string")]
    pub date: Option<String>,
    /// Zero-padded `HH:MM`
    #[serde(rename = "hora", default, with = "blank_string")]
    pub time: Option<String>,
    #[serde(rename = "modalidad", default)]
    pub modality: String,
    #[serde(rename = "objetivo", default, with = "blank_string")]
    pub objective: Option<String>,
}

impl Session {
    pub fn new(
        date: Option<String>,
        time: Option<String>,
        modality: String,
        objective: Option<String>,
    ) -> Self {
        Self {
            id: new_id(),
            date,
            time,
            modality,
            objective,
        }
    }

    /// Display order key: date and time concatenated, compared as plain
    /// strings. Only chronological while both parts stay zero-padded.
    pub fn sort_key(&self) -> String {
        format!(
            "{}{}",
            self.date.as_deref().unwrap_or(""),
            self.time.as_deref().unwrap_or("")
        )
    }
}

/// Stable ascending sort by [`Session::sort_key`].
pub fn sort_sessions(sessions: &mut [Session]) {
    sessions.sort_by_cached_key(Session::sort_key);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(date: &str, time: &str) -> Session {
        Session::new(
            Some(date.to_string()),
            Some(time.to_string()),
            "Presencial".to_string(),
            None,
        )
    }

    #[test]
    fn test_sort_key_concatenates() {
        assert_eq!(at("2024-03-01", "08:00").sort_key(), "2024-03-0108:00");

        let undated = Session::new(None, Some("10:30".to_string()), String::new(), None);
        assert_eq!(undated.sort_key(), "10:30");
    }

    #[test]
    fn test_sort_is_lexicographic() {
        let mut sessions = vec![
            at("2024-03-05", "09:00"),
            at("2024-03-01", "14:00"),
            at("2024-03-01", "08:00"),
        ];
        sort_sessions(&mut sessions);

        let keys: Vec<_> = sessions
            .iter()
            .map(|s| (s.date.clone().unwrap(), s.time.clone().unwrap()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("2024-03-01".to_string(), "08:00".to_string()),
                ("2024-03-01".to_string(), "14:00".to_string()),
                ("2024-03-05".to_string(), "09:00".to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_date_sorts_by_raw_string() {
        // "10:30" < "2024-..." because '1' < '2'
        let mut sessions = vec![
            at("2024-01-01", "09:00"),
            Session::new(None, Some("10:30".to_string()), String::new(), None),
        ];
        sort_sessions(&mut sessions);
        assert_eq!(sessions[0].date, None);
    }

    #[test]
    fn test_blank_fields_round_trip_as_empty_strings() {
        let session = Session::new(None, None, "Online".to_string(), None);
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["fecha"], "");
        assert_eq!(json["hora"], "");
        assert_eq!(json["objetivo"], "");

        let back: Session = serde_json::from_value(json).unwrap();
        assert_eq!(back, session);
    }
}
