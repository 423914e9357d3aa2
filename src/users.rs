//! The user collection, stored as one JSON array under [`USERS_KEY`].
//!
//! There is no cache: every call re-reads the array and every write
//! re-serializes all of it.

use tracing::{debug, trace, warn};

use crate::storage::{
    ShopError, StorageBackend, StorageError, USERS_KEY, load_list, save_list,
};
use crate::types::{Password, User, Username};

pub struct UserStore<'a, B: StorageBackend> {
    backend: &'a B,
}

impl<'a, B: StorageBackend> UserStore<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        UserStore { backend }
    }

    pub fn load_users(&self) -> Result<Vec<User>, StorageError> {
        load_list(self.backend, USERS_KEY)
    }

    pub fn save_users(&self, users: &[User]) -> Result<(), StorageError> {
        save_list(self.backend, USERS_KEY, users)?;
        trace!(count = users.len(), "Users saved");
        Ok(())
    }

    /// Appends a new user with empty collections and zero points.
    pub fn register(&self, username: Username, password: Password) -> Result<(), ShopError> {
        let mut users = self.load_users()?;

        if users.iter().any(|u| u.username == username) {
            debug!(username = %username, "Registration failed: username already exists");
            return Err(ShopError::DuplicateUsername(username));
        }

        debug!(username = %username, "Registering user");
        users.push(User::new(username, password));
        self.save_users(&users)?;
        Ok(())
    }

    pub fn find_by_credentials(
        &self,
        username: &Username,
        password: &str,
    ) -> Result<Option<User>, StorageError> {
        let user = self
            .load_users()?
            .into_iter()
            .find(|u| &u.username == username && u.password.matches(password));
        Ok(user)
    }

    pub fn find_by_username(&self, username: &Username) -> Result<Option<User>, StorageError> {
        let user = self
            .load_users()?
            .into_iter()
            .find(|u| &u.username == username);
        Ok(user)
    }

    /// Overwrites the stored record with the same username.
    ///
    /// Callers must make sure the user exists; an unknown username writes
    /// nothing.
    pub fn replace(&self, user: &User) -> Result<(), StorageError> {
        let mut users = self.load_users()?;

        match users.iter_mut().find(|u| u.username == user.username) {
            Some(slot) => {
                *slot = user.clone();
                self.save_users(&users)?;
                trace!(username = %user.username, "User replaced");
            }
            None => {
                warn!(username = %user.username, "Replace skipped: user not found");
            }
        }
        Ok(())
    }
}
