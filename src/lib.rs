pub mod account;
pub mod catalog;
pub mod config;
pub mod context;
pub mod render;
pub mod seed;
pub mod session;
pub mod storage;
pub mod types;
pub mod users;

pub use context::StoreContext;
pub use storage::{ShopError, StorageBackend, StorageError};
