//! Operations on the logged-in user's cart, favorites, purchases, points and
//! shipping data.
//!
//! Every mutation loads the current user, changes it in memory and writes the
//! whole record back through [`UserStore::replace`]. Two contexts working on
//! the same user over one backend therefore race: the later write wins and
//! silently drops the other's change, even to a different field.
//!
//! Mutations fail with [`ShopError::NotAuthenticated`] when nobody is logged
//! in. Readers return an empty or zero value instead.

use tracing::debug;

use crate::session::Session;
use crate::storage::{ShopError, StorageBackend, StorageError};
use crate::types::{BookId, BookIdSet, ShippingInfo, User};
use crate::users::UserStore;

pub struct Account<'a, B: StorageBackend> {
    backend: &'a B,
}

impl<'a, B: StorageBackend> Account<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Account { backend }
    }

    fn current_user(&self) -> Result<Option<User>, StorageError> {
        Session::new(self.backend).current_user()
    }

    /// Applies `f` to the current user and persists the record if `f` reports
    /// a change. Errors from `f` abort without writing.
    fn mutate<T, F>(&self, f: F) -> Result<T, ShopError>
    where
        F: FnOnce(&mut User) -> Result<(T, bool), ShopError>,
    {
        let mut user = self.current_user()?.ok_or(ShopError::NotAuthenticated)?;
        let (out, changed) = f(&mut user)?;
        if changed {
            UserStore::new(self.backend).replace(&user)?;
        }
        Ok(out)
    }

    fn read<T, F>(&self, f: F) -> Result<T, StorageError>
    where
        T: Default,
        F: FnOnce(User) -> T,
    {
        Ok(self.current_user()?.map(f).unwrap_or_default())
    }

    // ==================== Cart ====================

    pub fn add_to_cart(&self, book_id: BookId) -> Result<(), ShopError> {
        self.mutate(|user| {
            debug!(username = %user.username, book_id = %book_id, "Adding to cart");
            Ok(((), user.cart.insert(book_id)))
        })
    }

    pub fn remove_from_cart(&self, book_id: &BookId) -> Result<(), ShopError> {
        self.mutate(|user| {
            debug!(username = %user.username, book_id = %book_id, "Removing from cart");
            Ok(((), user.cart.remove(book_id)))
        })
    }

    pub fn clear_cart(&self) -> Result<(), ShopError> {
        self.mutate(|user| {
            let changed = !user.cart.is_empty();
            user.cart.clear();
            debug!(username = %user.username, "Cart cleared");
            Ok(((), changed))
        })
    }

    pub fn cart(&self) -> Result<BookIdSet, StorageError> {
        self.read(|user| user.cart)
    }

    // ==================== Favorites ====================

    pub fn add_to_favorites(&self, book_id: BookId) -> Result<(), ShopError> {
        self.mutate(|user| {
            debug!(username = %user.username, book_id = %book_id, "Adding to favorites");
            Ok(((), user.favorites.insert(book_id)))
        })
    }

    pub fn remove_from_favorites(&self, book_id: &BookId) -> Result<(), ShopError> {
        self.mutate(|user| {
            debug!(username = %user.username, book_id = %book_id, "Removing from favorites");
            Ok(((), user.favorites.remove(book_id)))
        })
    }

    pub fn favorites(&self) -> Result<BookIdSet, StorageError> {
        self.read(|user| user.favorites)
    }

    // ==================== Purchased ====================

    pub fn add_to_purchased(&self, book_id: BookId) -> Result<(), ShopError> {
        self.mutate(|user| {
            debug!(username = %user.username, book_id = %book_id, "Marking as purchased");
            Ok(((), user.purchased.insert(book_id)))
        })
    }

    pub fn remove_from_purchased(&self, book_id: &BookId) -> Result<(), ShopError> {
        self.mutate(|user| {
            debug!(username = %user.username, book_id = %book_id, "Unmarking as purchased");
            Ok(((), user.purchased.remove(book_id)))
        })
    }

    pub fn purchased(&self) -> Result<BookIdSet, StorageError> {
        self.read(|user| user.purchased)
    }

    // ==================== Points ====================

    /// Adds `amount` to the balance and returns the new balance.
    ///
    /// A negative amount is a deduction and fails like [`Self::use_points`]
    /// when the balance does not cover it. Large credits saturate.
    pub fn add_points(&self, amount: i64) -> Result<u64, ShopError> {
        self.mutate(|user| {
            let balance = match user.points.checked_add_signed(amount) {
                Some(balance) => balance,
                None if amount < 0 => {
                    return Err(ShopError::InsufficientPoints {
                        requested: amount.unsigned_abs(),
                        available: user.points,
                    });
                }
                None => u64::MAX,
            };
            debug!(username = %user.username, amount, balance, "Points added");
            user.points = balance;
            Ok((balance, amount != 0))
        })
    }

    /// Deducts `amount` from the balance and returns the new balance.
    pub fn use_points(&self, amount: u64) -> Result<u64, ShopError> {
        self.mutate(|user| {
            if user.points < amount {
                debug!(
                    username = %user.username,
                    requested = amount,
                    available = user.points,
                    "Not enough points"
                );
                return Err(ShopError::InsufficientPoints {
                    requested: amount,
                    available: user.points,
                });
            }
            user.points -= amount;
            debug!(username = %user.username, amount, balance = user.points, "Points used");
            Ok((user.points, amount != 0))
        })
    }

    pub fn points(&self) -> Result<u64, StorageError> {
        self.read(|user| user.points)
    }

    // ==================== Shipping ====================

    /// Replaces the stored shipping data as a whole.
    pub fn save_shipping_data(&self, info: ShippingInfo) -> Result<(), ShopError> {
        self.mutate(|user| {
            debug!(username = %user.username, "Saving shipping data");
            let changed = user.shipping_data.as_ref() != Some(&info);
            user.shipping_data = Some(info);
            Ok(((), changed))
        })
    }

    pub fn shipping_data(&self) -> Result<Option<ShippingInfo>, StorageError> {
        self.read(|user| user.shipping_data)
    }
}
