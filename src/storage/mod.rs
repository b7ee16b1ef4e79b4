mod json_store;

pub use json_store::JsonFileStore;

use tracing::warn;

use crate::entity::Document;
use crate::error::Result;

/// Whole-document persistence.
///
/// `save` always replaces the stored record; there are no partial writes.
/// `load` never fails on malformed content: an unreadable record is reported
/// as absent so the caller falls back to the seed.
pub trait DocumentStore {
    fn load(&self) -> Result<Option<Document>>;
    fn save(&mut self, doc: &Document) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
}

/// Decode a stored record, mapping malformed content to `None`.
pub(crate) fn decode(raw: &[u8], origin: &str) -> Option<Document> {
    match serde_json::from_slice(raw) {
        Ok(doc) => Some(doc),
        Err(e) => {
            warn!(origin, error = %e, "stored document is malformed, ignoring it");
            None
        }
    }
}

/// In-process store holding the serialized record, for tests and embedders.
#[derive(Debug, Default)]
pub struct MemoryStore {
    record: Option<String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an arbitrary raw record, valid or not
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            record: Some(raw.into()),
            writes: 0,
        }
    }

    /// Number of `save` calls so far
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn raw(&self) -> Option<&str> {
        self.record.as_deref()
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> Result<Option<Document>> {
        Ok(self
            .record
            .as_deref()
            .and_then(|raw| decode(raw.as_bytes(), "memory")))
    }

    fn save(&mut self, doc: &Document) -> Result<()> {
        self.record = Some(serde_json::to_string(doc)?);
        self.writes += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.record = None;
        Ok(())
    }
}
