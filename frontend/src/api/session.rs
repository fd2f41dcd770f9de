use std::cell::RefCell;

use super::types::{ApiError, SessionToken};
use crate::utils::storage::{self as storage_utils, StorageError};

/// Where the signed-in flag lives. Presence of a token is the whole check.
pub trait SessionStore {
    fn load(&self) -> Result<Option<SessionToken>, StorageError>;
    fn save(&self, token: &SessionToken) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

impl From<StorageError> for ApiError {
    fn from(error: StorageError) -> Self {
        ApiError::storage(error.to_string())
    }
}

pub struct BrowserSessionStore {
    key: String,
}

impl BrowserSessionStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Result<Option<SessionToken>, StorageError> {
        Ok(storage_utils::read_item(&self.key)?
            .filter(|value| !value.is_empty())
            .map(|value| SessionToken { value }))
    }

    fn save(&self, token: &SessionToken) -> Result<(), StorageError> {
        storage_utils::write_item(&self.key, &token.value)
    }

    fn clear(&self) -> Result<(), StorageError> {
        storage_utils::remove_item(&self.key)
    }
}

#[derive(Default)]
pub struct MemorySessionStore {
    token: RefCell<Option<SessionToken>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signed_in(value: impl Into<String>) -> Self {
        Self {
            token: RefCell::new(Some(SessionToken {
                value: value.into(),
            })),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<SessionToken>, StorageError> {
        Ok(self.token.borrow().clone())
    }

    fn save(&self, token: &SessionToken) -> Result<(), StorageError> {
        *self.token.borrow_mut() = Some(token.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.token.borrow_mut().take();
        Ok(())
    }
}
