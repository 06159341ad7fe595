//! Book fixtures for creating in-memory test data.

use chrono::Utc;
use entity::book;

/// Default test ISBN, a checksum-valid ISBN-13.
pub const DEFAULT_ISBN: &str = "9780306406157";

/// Default test book title.
pub const DEFAULT_TITLE: &str = "Test Book";

/// Default test book author.
pub const DEFAULT_AUTHOR: &str = "Test Author";

/// Creates a book entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - user_id: `1`
/// - shelf_id: `None`
/// - isbn: `"9780306406157"`
/// - title: `"Test Book"`
/// - author: `"Test Author"`
/// - image and google_books_id: `None`
pub fn entity() -> book::Model {
    entity_builder().build()
}

/// Creates a book entity builder for customizing test data.
pub fn entity_builder() -> BookEntityBuilder {
    BookEntityBuilder::default()
}

/// Builder for creating customized book entity models.
pub struct BookEntityBuilder {
    id: i32,
    user_id: i32,
    shelf_id: Option<i32>,
    isbn: String,
    title: String,
    image: Option<String>,
    google_books_id: Option<String>,
}

impl Default for BookEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            user_id: 1,
            shelf_id: None,
            isbn: DEFAULT_ISBN.to_string(),
            title: DEFAULT_TITLE.to_string(),
            image: None,
            google_books_id: None,
        }
    }
}

impl BookEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn shelf_id(mut self, shelf_id: Option<i32>) -> Self {
        self.shelf_id = shelf_id;
        self
    }

    pub fn isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = isbn.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    pub fn google_books_id(mut self, google_books_id: Option<String>) -> Self {
        self.google_books_id = google_books_id;
        self
    }

    /// Builds the book entity model.
    pub fn build(self) -> book::Model {
        let now = Utc::now();

        book::Model {
            id: self.id,
            user_id: self.user_id,
            shelf_id: self.shelf_id,
            isbn: self.isbn,
            title: self.title,
            subtitle: String::new(),
            author: DEFAULT_AUTHOR.to_string(),
            description: String::new(),
            publisher: String::new(),
            page_count: 0,
            image: self.image,
            google_books_id: self.google_books_id,
            created_at: now,
            updated_at: now,
        }
    }
}
