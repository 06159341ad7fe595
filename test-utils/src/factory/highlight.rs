//! Highlight factory for creating test highlight entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test highlights with customizable fields.
pub struct HighlightFactory<'a> {
    db: &'a DatabaseConnection,
    book_id: i32,
    page: i32,
    content: String,
    image: Option<String>,
}

impl<'a> HighlightFactory<'a> {
    /// Creates a new HighlightFactory with default values.
    ///
    /// Defaults:
    /// - page: `1`
    /// - content: a fixed quotation long enough to pass validation
    /// - image: `None`
    pub fn new(db: &'a DatabaseConnection, book_id: i32) -> Self {
        Self {
            db,
            book_id,
            page: 1,
            content: "It was the best of times, it was the worst of times.".to_string(),
            image: None,
        }
    }

    pub fn page(mut self, page: i32) -> Self {
        self.page = page;
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    /// Builds and inserts the highlight entity into the database.
    pub async fn build(self) -> Result<entity::highlight::Model, DbErr> {
        let now = Utc::now();

        entity::highlight::ActiveModel {
            book_id: ActiveValue::Set(self.book_id),
            page: ActiveValue::Set(self.page),
            content: ActiveValue::Set(self.content),
            image: ActiveValue::Set(self.image),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a highlight with default values on the given book.
pub async fn create_highlight(
    db: &DatabaseConnection,
    book_id: i32,
) -> Result<entity::highlight::Model, DbErr> {
    HighlightFactory::new(db, book_id).build().await
}
