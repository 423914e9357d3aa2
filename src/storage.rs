pub mod error;
pub mod memstore;
#[cfg(feature = "redb")]
pub mod redbstore;

pub use error::{ShopError, StorageError};

/// Key holding the JSON array of users.
pub const USERS_KEY: &str = "users";
/// Key holding the JSON array of books.
pub const BOOKS_KEY: &str = "books";
/// Key holding the logged-in username as a raw string.
pub const CURRENT_USER_KEY: &str = "currentUser";

/// Durable string-to-string mapping shared by every store.
///
/// Each call is a single synchronous step. `set` replaces the whole value
/// under a key, so readers never observe a partial write.
pub trait StorageBackend: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Reads the JSON array under `key`, treating a missing key as empty.
pub(crate) fn load_list<B, T>(backend: &B, key: &'static str) -> Result<Vec<T>, StorageError>
where
    B: StorageBackend + ?Sized,
    T: serde::de::DeserializeOwned,
{
    match backend.get(key)? {
        Some(text) => {
            serde_json::from_str(&text).map_err(|source| StorageError::Malformed { key, source })
        }
        None => Ok(Vec::new()),
    }
}

/// Serializes `items` and overwrites whatever is stored under `key`.
pub(crate) fn save_list<B, T>(backend: &B, key: &str, items: &[T]) -> Result<(), StorageError>
where
    B: StorageBackend + ?Sized,
    T: serde::Serialize,
{
    let text = serde_json::to_string(items)?;
    backend.set(key, &text)
}
