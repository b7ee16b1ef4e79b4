pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod progress;
pub mod storage;
pub mod tracker;
pub mod view;

pub use config::Config;
pub use error::{Result, TutorError};
pub use storage::{DocumentStore, JsonFileStore, MemoryStore};
pub use tracker::Tracker;
