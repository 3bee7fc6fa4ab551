//! Persisted session state.
//!
//! Pages receive a [`SessionStore`] instead of reaching for browser
//! storage directly, so tests can substitute an in-memory store.

use crate::models::auth::LoginResponse;
use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

const TOKEN_KEY: &str = "token";
const USERNAME_KEY: &str = "username";

/// Key-value store holding the logged-in session.
///
/// A missing token means nobody is logged in.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    backend: Backend,
}

#[derive(Clone, Debug, Default)]
enum Backend {
    /// Browser `localStorage`.
    #[default]
    Local,
    /// Process-local map, for tests.
    Memory(Rc<RefCell<HashMap<String, String>>>),
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        match (&self.backend, &other.backend) {
            (Backend::Local, Backend::Local) => true,
            (Backend::Memory(a), Backend::Memory(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl SessionStore {
    /// Store backed by a process-local map instead of `localStorage`.
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(Rc::new(RefCell::new(HashMap::new()))),
        }
    }

    /// The persisted session token, if any.
    pub fn token(&self) -> Option<String> {
        self.get(TOKEN_KEY)
    }

    /// The username the session was issued for, if any.
    pub fn username(&self) -> Option<String> {
        self.get(USERNAME_KEY)
    }

    /// Persist the session returned by a successful login.
    pub fn remember(&self, session: &LoginResponse) -> Result<(), StorageError> {
        self.set(TOKEN_KEY, &session.token)?;
        self.set(USERNAME_KEY, &session.username)
    }

    fn get(&self, key: &str) -> Option<String> {
        match &self.backend {
            Backend::Local => LocalStorage::get(key).ok(),
            Backend::Memory(map) => map.borrow().get(key).cloned(),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match &self.backend {
            Backend::Local => LocalStorage::set(key, value),
            Backend::Memory(map) => {
                map.borrow_mut().insert(key.to_string(), value.to_string());
                Ok(())
            }
        }
    }
}
