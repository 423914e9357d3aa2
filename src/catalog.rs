use tracing::debug;

use crate::storage::{BOOKS_KEY, StorageBackend, StorageError, load_list, save_list};
use crate::types::{Book, BookId};

/// Read view over the stored book list.
pub struct CatalogStore<'a, B: StorageBackend> {
    backend: &'a B,
}

impl<'a, B: StorageBackend> CatalogStore<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        CatalogStore { backend }
    }

    /// Stores `seed` only when no catalog exists yet. Returns whether it wrote.
    pub fn seed_if_empty(&self, seed: &[Book]) -> Result<bool, StorageError> {
        if self.backend.get(BOOKS_KEY)?.is_some() {
            debug!("Catalog already present, seed skipped");
            return Ok(false);
        }
        save_list(self.backend, BOOKS_KEY, seed)?;
        debug!(count = seed.len(), "Catalog seeded");
        Ok(true)
    }

    pub fn all(&self) -> Result<Vec<Book>, StorageError> {
        load_list(self.backend, BOOKS_KEY)
    }

    pub fn by_id(&self, id: &BookId) -> Result<Option<Book>, StorageError> {
        Ok(self.all()?.into_iter().find(|book| &book.id == id))
    }

    /// Books whose genre equals `genre` exactly, in catalog order.
    pub fn by_genre(&self, genre: &str) -> Result<Vec<Book>, StorageError> {
        let books: Vec<Book> = self
            .all()?
            .into_iter()
            .filter(|book| book.genre == genre)
            .collect();
        debug!(genre, count = books.len(), "Filtered catalog by genre");
        Ok(books)
    }

    /// Distinct genres in order of first appearance.
    pub fn genres(&self) -> Result<Vec<String>, StorageError> {
        let mut genres: Vec<String> = Vec::new();
        for book in self.all()? {
            if !genres.contains(&book.genre) {
                genres.push(book.genre);
            }
        }
        Ok(genres)
    }
}
