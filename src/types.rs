use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/*
 * Newtype wrappers for strong typing
 */
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(pub String);

/// Stored and compared verbatim. There is no hashing here.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Password(String);

/// A catalog entry. Never mutated once seeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub price: f64,
    pub image: String,
}

/// Delivery details, replaced wholesale on every save. No field is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingInfo {
    pub name: String,
    pub address: String,
    pub city: String,
    pub zipcode: String,
    pub phone: String,
}

/// A duplicate-free collection of book ids.
///
/// Ids keep the order they were first inserted in, and the set serializes as a
/// plain JSON array. Duplicates in stored data collapse on load. Ids are not
/// checked against the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BookIdSet(Vec<BookId>);

/// Main user abstraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: Username,
    pub password: Password,
    #[serde(default)]
    pub cart: BookIdSet,
    #[serde(default)]
    pub favorites: BookIdSet,
    #[serde(default)]
    pub purchased: BookIdSet,
    #[serde(default)]
    pub points: u64,
    #[serde(default)]
    pub shipping_data: Option<ShippingInfo>,
}

/*
 * Implementations on newtype wrappers
 */
impl BookId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BookId {
    fn from(value: &str) -> Self {
        BookId(value.to_string())
    }
}

impl From<String> for BookId {
    fn from(value: String) -> Self {
        BookId(value)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Username {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Username {
    fn from(value: &str) -> Self {
        Username(value.to_string())
    }
}

impl From<String> for Username {
    fn from(value: String) -> Self {
        Username(value)
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Password {
    pub fn new(value: impl Into<String>) -> Self {
        Password(value.into())
    }

    /// Exact, case-sensitive comparison.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

impl From<&str> for Password {
    fn from(value: &str) -> Self {
        Password(value.to_string())
    }
}

// Keep passwords out of log lines and debug dumps.
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

impl BookIdSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` unless already present. Returns whether the set changed.
    pub fn insert(&mut self, id: BookId) -> bool {
        if self.contains(&id) {
            false
        } else {
            self.0.push(id);
            true
        }
    }

    /// Removes `id` if present. Returns whether the set changed.
    pub fn remove(&mut self, id: &BookId) -> bool {
        let before = self.0.len();
        self.0.retain(|existing| existing != id);
        self.0.len() != before
    }

    pub fn contains(&self, id: &BookId) -> bool {
        self.0.iter().any(|existing| existing == id)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BookId> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<BookId> {
        self.0
    }
}

impl FromIterator<BookId> for BookIdSet {
    fn from_iter<I: IntoIterator<Item = BookId>>(iter: I) -> Self {
        let mut set = BookIdSet::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl<'de> Deserialize<'de> for BookIdSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ids = Vec::<BookId>::deserialize(deserializer)?;
        Ok(ids.into_iter().collect())
    }
}

impl User {
    /// A freshly registered user: empty collections, zero points, no shipping data.
    pub fn new(username: Username, password: Password) -> Self {
        User {
            username,
            password,
            cart: BookIdSet::new(),
            favorites: BookIdSet::new(),
            purchased: BookIdSet::new(),
            points: 0,
            shipping_data: None,
        }
    }
}
