use crate::account::Account;
use crate::catalog::CatalogStore;
use crate::session::Session;
use crate::storage::StorageBackend;
use crate::users::UserStore;

/// Owns a backend and hands out the stores that read and write through it.
///
/// The stores are stateless views, so they are cheap to create per call.
/// Independent contexts over independent backends never see each other.
pub struct StoreContext<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> StoreContext<B> {
    pub fn new(backend: B) -> Self {
        StoreContext { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn users(&self) -> UserStore<'_, B> {
        UserStore::new(&self.backend)
    }

    pub fn session(&self) -> Session<'_, B> {
        Session::new(&self.backend)
    }

    pub fn account(&self) -> Account<'_, B> {
        Account::new(&self.backend)
    }

    pub fn catalog(&self) -> CatalogStore<'_, B> {
        CatalogStore::new(&self.backend)
    }
}
