use thiserror::Error;
use web_sys::{Storage, Window};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("No window object")]
    NoWindow,
    #[error("No localStorage")]
    Unavailable,
    #[error("Failed to read `{0}` from localStorage")]
    Read(String),
    #[error("Failed to write `{0}` to localStorage")]
    Write(String),
}

pub fn window() -> Result<Window, StorageError> {
    web_sys::window().ok_or(StorageError::NoWindow)
}

pub fn local_storage() -> Result<Storage, StorageError> {
    window()?
        .local_storage()
        .map_err(|_| StorageError::Unavailable)?
        .ok_or(StorageError::Unavailable)
}

pub fn read_item(key: &str) -> Result<Option<String>, StorageError> {
    local_storage()?
        .get_item(key)
        .map_err(|_| StorageError::Read(key.to_string()))
}

pub fn write_item(key: &str, value: &str) -> Result<(), StorageError> {
    local_storage()?
        .set_item(key, value)
        .map_err(|_| StorageError::Write(key.to_string()))
}

pub fn remove_item(key: &str) -> Result<(), StorageError> {
    local_storage()?
        .remove_item(key)
        .map_err(|_| StorageError::Write(key.to_string()))
}
