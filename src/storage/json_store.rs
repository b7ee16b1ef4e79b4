use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{decode, DocumentStore};
use crate::entity::Document;
use crate::error::Result;

/// One JSON file per storage key inside the data directory.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Point at `<data_dir>/<storage_key>.json`. Nothing is touched on disk
    /// until the first save.
    pub fn open(data_dir: &Path, storage_key: &str) -> Self {
        Self {
            path: data_dir.join(format!("{}.json", storage_key)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self) -> Result<Option<Document>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no stored document");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let origin = self.path.display().to_string();
        Ok(decode(&bytes, &origin))
    }

    fn save(&mut self, doc: &Document) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write beside the target and rename so readers never see a partial file
        let tmp = self.temp_path();
        fs::write(&tmp, serde_json::to_vec_pretty(doc)?)?;
        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), "document saved");
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "stored document removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
