//! Error types for the storage backends and the shop operations built on them.
//!
//! Backend failures are collapsed into [`StorageError`], using a macro to
//! reduce boilerplate for the redb conversions. [`ShopError`] is what the
//! user-facing operations return.

use thiserror::Error;

use crate::types::Username;

/// Macro to implement From traits for redb errors.
///
/// Every redb failure is reported as an opaque backend error; callers only
/// care that the write did not happen.
macro_rules! impl_backend_error_conversions {
    ($error_type:ty, $($source:ty),+ $(,)?) => {
        $(
            #[cfg(feature = "redb")]
            impl From<$source> for $error_type {
                fn from(err: $source) -> Self {
                    Self::Backend(err.to_string())
                }
            }
        )+
    };
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage backend error: {0}")]
    Backend(String),
    #[error("Malformed data under key `{key}`: {source}")]
    Malformed {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl_backend_error_conversions!(
    StorageError,
    redb::DatabaseError,
    redb::TransactionError,
    redb::TableError,
    redb::CommitError,
    redb::StorageError,
);

#[derive(Debug, Error)]
pub enum ShopError {
    #[error("Username `{0}` is already taken")]
    DuplicateUsername(Username),
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("No user is logged in")]
    NotAuthenticated,
    #[error("Not enough points: requested {requested}, available {available}")]
    InsufficientPoints { requested: u64, available: u64 },
    #[error(transparent)]
    Storage(#[from] StorageError),
}
