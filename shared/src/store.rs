use std::cell::RefCell;

use thiserror::Error;

use crate::guess::{Guess, GuessLog};

/// Storage key holding the JSON-encoded [`GuessLog`].
pub const GUESSES_STORAGE_KEY: &str = "guesses";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("guess log is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage backend failed: {0}")]
    Backend(String),
}

/// Persistence for the day-keyed guess log.
///
/// Implementors only provide whole-log load/save; the per-day helpers keep
/// other days intact when one day is rewritten.
pub trait GuessStore {
    fn load_all(&self) -> Result<GuessLog, StoreError>;

    fn save_all(&self, log: &GuessLog) -> Result<(), StoreError>;

    fn load_day(&self, day: &str) -> Result<Vec<Guess>, StoreError> {
        Ok(self.load_all()?.remove(day).unwrap_or_default())
    }

    /// Replace one day's guesses. An unreadable existing log is discarded.
    fn save_day(&self, day: &str, guesses: &[Guess]) -> Result<(), StoreError> {
        let mut log = self.load_all().unwrap_or_default();
        log.insert(day.to_owned(), guesses.to_vec());
        self.save_all(&log)
    }
}

/// In-memory store holding the same JSON text a browser would.
#[derive(Debug, Default)]
pub struct MemoryGuessStore {
    raw: RefCell<Option<String>>,
}

impl MemoryGuessStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: RefCell::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }
}

impl GuessStore for MemoryGuessStore {
    fn load_all(&self) -> Result<GuessLog, StoreError> {
        match self.raw.borrow().as_deref() {
            Some(raw) => Ok(serde_json::from_str(raw)?),
            None => Ok(GuessLog::new()),
        }
    }

    fn save_all(&self, log: &GuessLog) -> Result<(), StoreError> {
        let json = serde_json::to_string(log)?;
        *self.raw.borrow_mut() = Some(json);
        Ok(())
    }
}
