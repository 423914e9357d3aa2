use tracing::debug;

use crate::storage::{CURRENT_USER_KEY, ShopError, StorageBackend, StorageError};
use crate::types::{User, Username};
use crate::users::UserStore;

/// The "who is logged in" pointer, kept in the backend as a bare username.
pub struct Session<'a, B: StorageBackend> {
    backend: &'a B,
}

impl<'a, B: StorageBackend> Session<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Session { backend }
    }

    fn users(&self) -> UserStore<'a, B> {
        UserStore::new(self.backend)
    }

    /// Points the session at `username` when the password matches. A failed
    /// attempt leaves any existing session in place.
    pub fn login(&self, username: &Username, password: &str) -> Result<(), ShopError> {
        match self.users().find_by_credentials(username, password)? {
            Some(user) => {
                self.backend.set(CURRENT_USER_KEY, user.username.as_str())?;
                debug!(username = %user.username, "Logged in");
                Ok(())
            }
            None => {
                debug!(username = %username, "Login failed: invalid credentials");
                Err(ShopError::InvalidCredentials)
            }
        }
    }

    pub fn logout(&self) -> Result<(), StorageError> {
        self.backend.remove(CURRENT_USER_KEY)?;
        debug!("Logged out");
        Ok(())
    }

    /// Resolves the pointer through the user store. A pointer to a user that
    /// no longer exists reads as logged out.
    pub fn current_user(&self) -> Result<Option<User>, StorageError> {
        let Some(username) = self.backend.get(CURRENT_USER_KEY)? else {
            return Ok(None);
        };
        if username.is_empty() {
            return Ok(None);
        }

        let user = self.users().find_by_username(&Username(username))?;
        if user.is_none() {
            debug!("Session points at a missing user");
        }
        Ok(user)
    }

    pub fn is_logged_in(&self) -> Result<bool, StorageError> {
        Ok(self.current_user()?.is_some())
    }
}
