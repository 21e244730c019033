use crate::catalog::media::MediaDetails;

/// A catalog entry for a single book.
///
/// Title, author, and ISBN belong to the book itself; page count and price
/// live in the composed [`MediaDetails`] capability and go through its
/// validated setters.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    title: String,
    author: String,
    isbn: String,
    media: MediaDetails,
}

impl Book {
    /// Creates a book with all five attributes supplied at once.
    ///
    /// Page count and price are forwarded to the [`MediaDetails`] setters
    /// unconditionally and are subject to their validation.
    pub fn new(title: &str, author: &str, isbn: &str, page_count: u32, price: f64) -> Self {
        let mut media = MediaDetails::new();
        media.set_page_count(page_count);
        media.set_price(price);

        Book {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            media,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn page_count(&self) -> u32 {
        self.media.page_count()
    }

    pub fn price(&self) -> f64 {
        self.media.price()
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn set_author(&mut self, author: &str) {
        self.author = author.to_string();
    }

    pub fn set_isbn(&mut self, isbn: &str) {
        self.isbn = isbn.to_string();
    }

    pub fn set_page_count(&mut self, count: u32) {
        self.media.set_page_count(count);
    }

    pub fn set_price(&mut self, amount: f64) {
        self.media.set_price(amount);
    }
}
