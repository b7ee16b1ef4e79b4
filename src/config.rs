use std::path::{Path, PathBuf};

use crate::error::{Result, TutorError};

/// Storage key used when nothing else is configured.
pub const DEFAULT_STORAGE_KEY: &str = "mentoria_refuerzo_v1";

pub const DATA_DIR_ENV: &str = "TUTORDESK_DIR";
pub const STORAGE_KEY_ENV: &str = "TUTORDESK_STORAGE_KEY";

const APP_DIR: &str = "tutordesk";

/// Where the document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub storage_key: String,
}

impl Config {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    /// Resolve from the command line flag, then the environment, then the
    /// platform data directory.
    pub fn resolve(data_dir_flag: Option<&Path>) -> Result<Self> {
        Self::resolve_with(data_dir_flag, |key| std::env::var(key).ok())
    }

    fn resolve_with<F>(data_dir_flag: Option<&Path>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = match data_dir_flag {
            Some(dir) => dir.to_path_buf(),
            None => match env(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
                Some(dir) => PathBuf::from(dir),
                None => dirs::data_dir()
                    .map(|d| d.join(APP_DIR))
                    .ok_or_else(|| {
                        TutorError::Config(format!(
                            "could not determine a data directory; set {} or pass --data-dir",
                            DATA_DIR_ENV
                        ))
                    })?,
            },
        };

        let storage_key = match env(STORAGE_KEY_ENV) {
            Some(key) => validate_storage_key(&key)?,
            None => DEFAULT_STORAGE_KEY.to_string(),
        };

        Ok(Self {
            data_dir,
            storage_key,
        })
    }
}

fn validate_storage_key(key: &str) -> Result<String> {
    let key = key.trim();
    if key.is_empty() {
        return Err(TutorError::Config(format!("{} is empty", STORAGE_KEY_ENV)));
    }
    if key.contains(|c| c == '/' || c == '\\') || key == "." || key == ".." {
        return Err(TutorError::Config(format!(
            "{} must be a plain name, got '{}'",
            STORAGE_KEY_ENV, key
        )));
    }
    Ok(key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_flag_wins_over_env() {
        let config = Config::resolve_with(
            Some(Path::new("/tmp/flag")),
            env_of(&[(DATA_DIR_ENV, "/tmp/env")]),
        )
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/flag"));
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_env_data_dir() {
        let config = Config::resolve_with(None, env_of(&[(DATA_DIR_ENV, "/tmp/env")])).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/env"));
    }

    #[test]
    fn test_storage_key_override() {
        let config = Config::resolve_with(
            Some(Path::new("/tmp")),
            env_of(&[(STORAGE_KEY_ENV, "refuerzo_v2")]),
        )
        .unwrap();
        assert_eq!(config.storage_key, "refuerzo_v2");
    }

    #[test]
    fn test_storage_key_rejects_paths() {
        let result = Config::resolve_with(
            Some(Path::new("/tmp")),
            env_of(&[(STORAGE_KEY_ENV, "../escape")]),
        );
        assert!(matches!(result, Err(TutorError::Config(_))));

        let result = Config::resolve_with(Some(Path::new("/tmp")), env_of(&[(STORAGE_KEY_ENV, "  ")]));
        assert!(matches!(result, Err(TutorError::Config(_))));
    }
}
