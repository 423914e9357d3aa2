//! Plain-text rendering of book listings and operation outcomes.
//!
//! Nothing here touches storage; callers pass in what they already loaded.

use std::convert::Infallible;
use std::fmt::Write as _;
use std::str::FromStr;

use crate::storage::ShopError;
use crate::types::Book;

/// Which part of the catalog to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    All,
    Genre(String),
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == "all" {
            Category::All
        } else {
            Category::Genre(s.to_string())
        })
    }
}

/// Where a listing button sends a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    Cart,
    Favorites,
}

impl ListAction {
    fn target(self) -> &'static str {
        match self {
            ListAction::Cart => "your cart",
            ListAction::Favorites => "your favourites",
        }
    }

    fn login_hint(self) -> &'static str {
        match self {
            ListAction::Cart => "Please log in to add books to your cart.",
            ListAction::Favorites => "Please log in to add books to favourites.",
        }
    }
}

/// Formats a price the way listings show it, e.g. `33.99 PLN`.
pub fn format_price(price: f64) -> String {
    format!("{price:.2} PLN")
}

fn write_card(out: &mut String, book: &Book) {
    // Writing into a String cannot fail.
    let _ = writeln!(out, "[{}] {}", book.id, book.title);
    let _ = writeln!(out, "  by {}", book.author);
    let _ = writeln!(out, "  {}", book.genre);
    let _ = writeln!(out, "  {}", format_price(book.price));
    let _ = writeln!(out, "  image: {}", book.image);
}

/// One card per book, separated by blank lines. No books, no output.
pub fn render_books(books: &[Book]) -> String {
    let mut out = String::new();
    for (index, book) in books.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        write_card(&mut out, book);
    }
    out
}

/// Renders `catalog` for the selected category. A genre gets a heading line
/// followed by its books in catalog order.
pub fn render_category(catalog: &[Book], category: &Category) -> String {
    match category {
        Category::All => render_books(catalog),
        Category::Genre(genre) => {
            let books: Vec<Book> = catalog
                .iter()
                .filter(|book| &book.genre == genre)
                .cloned()
                .collect();
            let mut out = format!("== {genre} ==\n");
            if books.is_empty() {
                out.push_str("(no books)\n");
            } else {
                out.push_str(&render_books(&books));
            }
            out
        }
    }
}

/// The message shown after trying to add `book` somewhere.
pub fn outcome_message(action: ListAction, book: &Book, outcome: &Result<(), ShopError>) -> String {
    match outcome {
        Ok(()) => format!("✓ Added \"{}\" to {}.", book.title, action.target()),
        Err(ShopError::NotAuthenticated) => action.login_hint().to_string(),
        Err(err) => err.to_string(),
    }
}
