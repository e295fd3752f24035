//! Durable storage for the match log.
//!
//! Persistence goes through an opaque key-value abstraction: the whole
//! history is serialized as one JSON array under a single key, read once at
//! startup and rewritten in full after every completed game. Unreadable or
//! missing data falls back to an empty history and is never fatal.

use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use directories::ProjectDirs;
use log::warn;

use crate::stats::{GameResult, MatchHistory};

/// Key the match log is stored under.
pub const HISTORY_KEY: &str = "gameResults";

/// Opaque durable store: string values under string keys.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// In-memory store for tests and transient sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Store backed by one JSON file per key in the platform config directory.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open the store in the platform-specific config directory, creating
    /// it if needed. Falls back to the current directory on platforms
    /// without a well-known location.
    pub fn open() -> io::Result<Self> {
        let dir = match ProjectDirs::from("io.github", "gridfire", "Gridfire") {
            Some(dirs) => dirs.config_dir().to_path_buf(),
            None => std::env::current_dir()?,
        };
        Self::with_dir(dir)
    }

    /// Open the store rooted at an explicit directory.
    pub fn with_dir(dir: PathBuf) -> io::Result<Self> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path(key)).ok()
    }

    fn put(&mut self, key: &str, value: &str) -> io::Result<()> {
        let mut file = fs::File::create(self.path(key))?;
        file.write_all(value.as_bytes())?;
        Ok(())
    }
}

/// Load the match log. Absent or unparseable data yields an empty history.
pub fn load_history(store: &impl KeyValueStore) -> MatchHistory {
    match store.get(HISTORY_KEY) {
        Some(raw) => match serde_json::from_str::<Vec<GameResult>>(&raw) {
            Ok(results) => MatchHistory::from_results(results),
            Err(err) => {
                warn!("discarding unreadable match log: {err}");
                MatchHistory::new()
            }
        },
        None => MatchHistory::new(),
    }
}

/// Write the full match log back to the store.
pub fn save_history(store: &mut impl KeyValueStore, history: &MatchHistory) -> io::Result<()> {
    let raw = serde_json::to_string(history.results())
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    store.put(HISTORY_KEY, &raw)
}
