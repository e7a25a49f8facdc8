use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use tradle_shared::store::{GUESSES_STORAGE_KEY, GuessStore, StoreError};
use tradle_shared::{GuessLog, Settings};
use tradle_shared::settings::SETTINGS_STORAGE_KEY;

/// Guess log kept in the browser's local storage under `"guesses"`.
pub(crate) struct LocalStorageGuessStore;

impl GuessStore for LocalStorageGuessStore {
    fn load_all(&self) -> Result<GuessLog, StoreError> {
        match LocalStorage::get::<GuessLog>(GUESSES_STORAGE_KEY) {
            Ok(log) => Ok(log),
            Err(StorageError::KeyNotFound(_)) => Ok(GuessLog::new()),
            Err(StorageError::SerdeError(e)) => Err(StoreError::Json(e)),
            Err(e) => Err(StoreError::Backend(e.to_string())),
        }
    }

    fn save_all(&self, log: &GuessLog) -> Result<(), StoreError> {
        LocalStorage::set(GUESSES_STORAGE_KEY, log).map_err(|e| match e {
            StorageError::SerdeError(e) => StoreError::Json(e),
            other => StoreError::Backend(other.to_string()),
        })
    }
}

pub(crate) fn load_settings() -> Settings {
    LocalStorage::get(SETTINGS_STORAGE_KEY).unwrap_or_default()
}

pub(crate) fn save_settings(settings: &Settings) {
    if let Err(e) = LocalStorage::set(SETTINGS_STORAGE_KEY, settings) {
        web_sys::console::warn_1(&format!("Failed to save settings: {e}").into());
    }
}
