use crate::types::Book;

fn book(id: &str, title: &str, author: &str, genre: &str, price: f64, image: &str) -> Book {
    Book {
        id: id.into(),
        title: title.to_string(),
        author: author.to_string(),
        genre: genre.to_string(),
        price,
        image: image.to_string(),
    }
}

/// The catalog written on first run.
pub fn default_catalog() -> Vec<Book> {
    vec![
        book("book1", "Clean Code", "Robert C. Martin", "Programming", 49.99, "img/clean.jpg"),
        book("book2", "You Don't Know JS", "Kyle Simpson", "Programming", 39.99, "img/you.jpg"),
        book("book3", "Refactoring", "Martin Fowler", "Programming", 59.99, "img/ref.jpg"),
        book("book4", "The Pragmatic Programmer", "David Thomas & Andrew Hunt", "Programming", 54.99, "img/parag.jpg"),
        book("book5", "Design Patterns", "Gang of Four", "Programming", 69.99, "img/des.jpg"),
        book("book6", "Harry Potter i Kamień Filozoficzny", "J.K. Rowling", "Fantasy", 33.99, "img/kam.jpg"),
        book("book7", "Harry Potter i Komnata Tajemnic", "J.K. Rowling", "Fantasy", 33.99, "img/kom.jpg"),
        book("book8", "Harry Potter i Więzień Azkabanu", "J.K. Rowling", "Fantasy", 33.99, "img/wiez.jpg"),
        book("book9", "Harry Potter i Czara ognia", "J.K. Rowling", "Fantasy", 33.99, "img/czara.jpg"),
        book("book10", "Harry Potter i Zakon Feniksa", "J.K. Rowling", "Fantasy", 33.99, "img/zakon.jpg"),
        book("book11", "Harry Potter i Książę Półkrwi", "J.K. Rowling", "Fantasy", 33.99, "img/ksiaz.jpg"),
        book("book12", "Harry Potter i Insygnia Śmierci", "J.K. Rowling", "Fantasy", 33.99, "img/insygnia.jpg"),
        book("book13", "Narkotyki", "Stanisław Ignacy Witkiewicz", "Essay", 38.99, "img/nark.jpg"),
        book("book14", "Lalka", "Bolesław Prus", "Classic Polish literature", 74.99, "img/lalka.jpg"),
        book("book15", "Chłopi", "Władysław Stanisław Reymont", "Classic Polish literature", 112.99, "img/chlopi.jpg"),
        book("book16", "To Kill a Mockingbird", "Harper Lee", "Drama", 12.99, "img/tokill.jpg"),
        book("book17", "Pride and Prejudice", "Jane Austen", "Drama", 58.99, "img/price.jpg"),
        book("book18", "1984", "George Orwell", "Dystopian novel", 29.99, "img/1984.jpg"),
        book("book19", "The Book Thief", "Markus Zusak", "Drama", 20.99, "img/thif.png"),
        book("book20", "Fahrenheit 451", "Ray Bradbury", "Dystopian novel", 42.99, "img/451.jpg"),
        book("book21", "Steve Jobs", "Walter Isaacson", "Biography", 59.67, "img/steve.jpg"),
        book("book22", "John Adams", "David McCullough", "Biography", 26.89, "img/john.jpg"),
        book("book23", "Alexander Hamilton", "Ron Chernow", "Biography", 90.99, "img/alex.jpg"),
        book("book24", "Capital in the Twenty First Century", "Thomas Piketty", "Economy", 109.79, "img/capital.jpg"),
        book("book25", "Basic Economics: A Citizen's Guide to the Economy", "Thomas Sowell", "Economy", 34.99, "img/basic.jpg"),
        book("book26", "Thinking, Fast and Slow", "Daniel Kahneman", "Economy", 38.99, "img/think.jpg"),
        book("book27", "The Hitchhiker’s Guide to the Galaxy", "Douglas Adams", "Science Fiction", 18.99, "img/galaxy.jpg"),
        book("book28", "Dune", "Frank Herbert", "Science Fiction", 20.99, "img/dune.jpg"),
        book("book29", "Brave New World", "Aldous Huxley", "Science Fiction", 8.99, "img/brave.jpg"),
        book("book30", "Love You Forever", "Robert Munsch", "For Kids", 39.99, "img/love.jpg"),
        book("book31", "The Girl With the Dragon Tattoo", "Stieg Larsson", "Detective", 39.99, "img/girl.jpg"),
        book("book32", "The Big Sleep", "Raymond Chandler", "Detective", 19.99, "img/sleep.jpg"),
        book("book33", "Murder on the Orient Express", "Agatha Christie", "Detective", 32.99, "img/murder.jpg"),
        book("book34", "The Complete Sherlock Holmes", "Arthur Conan Doyle", "Detective", 10.29, "img/holmes.jpg"),
        book("book35", "The Giving Tree", "Shel Silverstein", "For Kids", 15.99, "img/tree.jpg"),
        book("book36", "Charlotte’s Web", "E.B. White", "For Kids", 26.69, "img/web.jpg"),
        book("book37", "Where the Sidewalk Ends", "Shel Silverstein", "For Kids", 13.99, "img/ends.jpg"),
        book("book38", "If You Give a Mouse a Cookie", "Laura Joffe Numeroff", "For Kids", 19.29, "img/mouse.jpg"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_sequential() {
        let books = default_catalog();
        assert_eq!(books.len(), 38);
        for (index, book) in books.iter().enumerate() {
            assert_eq!(book.id.as_str(), format!("book{}", index + 1));
        }
    }

    #[test]
    fn prices_are_non_negative() {
        assert!(default_catalog().iter().all(|book| book.price >= 0.0));
    }
}
