//! Book factory for creating test book entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test books with customizable fields.
///
/// The default ISBN is unique per factory call but is not a checksum-valid ISBN-13. Set
/// one explicitly when a test exercises ISBN validation.
pub struct BookFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    shelf_id: Option<i32>,
    isbn: String,
    title: String,
    author: String,
    page_count: i32,
    image: Option<String>,
    google_books_id: Option<String>,
}

impl<'a> BookFactory<'a> {
    /// Creates a new BookFactory with default values.
    ///
    /// Defaults:
    /// - isbn: `"978{id:010}"`
    /// - title: `"Book {id}"`
    /// - author: `"Author {id}"`
    /// - page_count: `100`
    /// - shelf_id, image, google_books_id: `None`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            shelf_id: None,
            isbn: format!("978{:010}", id),
            title: format!("Book {}", id),
            author: format!("Author {}", id),
            page_count: 100,
            image: None,
            google_books_id: None,
        }
    }

    pub fn isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = isbn.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn shelf_id(mut self, shelf_id: Option<i32>) -> Self {
        self.shelf_id = shelf_id;
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

    /// Builds and inserts the book entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::book::Model)` - Created book entity
    /// - `Err(DbErr)` - Database error during insert, including duplicate ISBNs per owner
    pub async fn build(self) -> Result<entity::book::Model, DbErr> {
        let now = Utc::now();

        entity::book::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            shelf_id: ActiveValue::Set(self.shelf_id),
            isbn: ActiveValue::Set(self.isbn),
            title: ActiveValue::Set(self.title),
            subtitle: ActiveValue::Set(String::new()),
            author: ActiveValue::Set(self.author),
            description: ActiveValue::Set(String::new()),
            publisher: ActiveValue::Set(String::new()),
            page_count: ActiveValue::Set(self.page_count),
            image: ActiveValue::Set(self.image),
            google_books_id: ActiveValue::Set(self.google_books_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a book with default values for the given owner.
pub async fn create_book(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::book::Model, DbErr> {
    BookFactory::new(db, user_id).build().await
}
