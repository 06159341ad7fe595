//! Book domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::book::BookFormDto,
    server::{
        model::{google_books, user::non_blank},
        util::validation::ValidationErrors,
    },
};

/// Shown when a book has neither an uploaded cover nor a Google Books id.
pub const DEFAULT_COVER_URL: &str = "/default_book.png";

/// Public URL prefix of uploaded covers.
pub const COVER_URL_PREFIX: &str = "/books/image";

/// Book owned by one user, identified within that user's library by ISBN.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: i32,
    pub user_id: i32,
    pub shelf_id: Option<i32>,
    pub isbn: String,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub description: String,
    pub publisher: String,
    pub page_count: i32,
    /// Stored cover file name.
    pub image: Option<String>,
    pub google_books_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Book {
    /// Converts an entity model to a book domain model at the repository boundary.
    pub fn from_entity(entity: entity::book::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            shelf_id: entity.shelf_id,
            isbn: entity.isbn,
            title: entity.title,
            subtitle: entity.subtitle,
            author: entity.author,
            description: entity.description,
            publisher: entity.publisher,
            page_count: entity.page_count,
            image: entity.image,
            google_books_id: entity.google_books_id,
            created_at: entity.created_at,
        }
    }

    /// Cover to display: uploaded image, then the Google Books thumbnail, then the
    /// placeholder.
    pub fn cover_url(&self) -> String {
        if let Some(image) = self.image.as_deref().filter(|i| !i.is_empty()) {
            return format!("{}/{}", COVER_URL_PREFIX, image);
        }

        if let Some(id) = self.google_books_id.as_deref().filter(|i| !i.is_empty()) {
            return google_books::cover_url(id);
        }

        DEFAULT_COVER_URL.to_string()
    }

    /// Pre-fills the edit form with the stored book.
    pub fn to_form(&self) -> BookFormDto {
        BookFormDto {
            csrf_token: String::new(),
            isbn: self.isbn.clone(),
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            author: self.author.clone(),
            description: self.description.clone(),
            publisher: self.publisher.clone(),
            page_count: self.page_count.to_string(),
            google_books_id: self.google_books_id.clone().unwrap_or_default(),
        }
    }
}

/// Validated fields for adding a book to a user's library.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBookParam {
    pub user_id: i32,
    pub isbn: String,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub description: String,
    pub publisher: String,
    pub page_count: i32,
    pub google_books_id: Option<String>,
}

impl CreateBookParam {
    /// Validates the new book form for `user_id`.
    ///
    /// # Returns
    /// - `Ok(CreateBookParam)` - Trimmed, validated fields
    /// - `Err(ValidationErrors)` - Messages keyed by form field
    pub fn from_form(user_id: i32, form: &BookFormDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let isbn = form.isbn.trim();

        let page_count = validate_book_fields(&mut errors, form);
        errors.numeric("isbn", "ISBN", isbn);
        errors.isbn13("isbn", "ISBN", isbn);
        errors.length(
            "google_books_id",
            "Google Books ID",
            &form.google_books_id,
            0,
            30,
        );

        errors.into_result(Self {
            user_id,
            isbn: isbn.to_string(),
            title: form.title.trim().to_string(),
            subtitle: form.subtitle.trim().to_string(),
            author: form.author.trim().to_string(),
            description: form.description.trim().to_string(),
            publisher: form.publisher.trim().to_string(),
            page_count: page_count.unwrap_or_default(),
            google_books_id: non_blank(&form.google_books_id),
        })
    }
}

/// Validated changes to an existing book. ISBN and Google Books id are immutable.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBookParam {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub description: String,
    pub publisher: String,
    pub page_count: i32,
}

impl UpdateBookParam {
    /// Validates the edit book form.
    pub fn from_form(form: &BookFormDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let page_count = validate_book_fields(&mut errors, form);

        errors.into_result(Self {
            title: form.title.trim().to_string(),
            subtitle: form.subtitle.trim().to_string(),
            author: form.author.trim().to_string(),
            description: form.description.trim().to_string(),
            publisher: form.publisher.trim().to_string(),
            page_count: page_count.unwrap_or_default(),
        })
    }
}

/// Rules shared by the new and edit forms. Returns the parsed page count.
fn validate_book_fields(errors: &mut ValidationErrors, form: &BookFormDto) -> Option<i32> {
    errors.present("title", "Title", &form.title);
    errors.length("title", "Title", &form.title, 0, 100);
    errors.length("subtitle", "Subtitle", &form.subtitle, 0, 100);
    errors.present("author", "Author", &form.author);
    errors.length("author", "Author", &form.author, 0, 100);
    errors.length("description", "Description", &form.description, 0, 2000);
    errors.length("publisher", "Publisher", &form.publisher, 0, 50);
    errors.int_min("page_count", "Page count", &form.page_count, 0)
}
