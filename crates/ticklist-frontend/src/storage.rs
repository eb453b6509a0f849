//! `window.localStorage` backend.

use ticklist::{Storage, StorageError};
use zoon::web_sys;

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl LocalStorage {
    fn backend() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .ok()
            .flatten()
            .ok_or(StorageError::Unavailable)
    }

    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::backend()?
            .remove_item(key)
            .map_err(|error| StorageError::Write {
                key: key.to_owned(),
                message: format!("{error:?}"),
            })
    }
}

impl Storage for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::backend()?
            .get_item(key)
            .map_err(|error| StorageError::Read {
                key: key.to_owned(),
                message: format!("{error:?}"),
            })
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::backend()?
            .set_item(key, value)
            .map_err(|error| StorageError::Write {
                key: key.to_owned(),
                message: format!("{error:?}"),
            })
    }
}
