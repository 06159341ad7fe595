//! Book service.
//!
//! Adds the rules that need the database on top of field validation: ISBN uniqueness
//! within a library and shelf ownership. Also keeps cover and highlight image files in
//! step with the rows that reference them.

use image::DynamicImage;
use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    model::book::BookFormDto,
    server::{
        data::{book::BookRepository, highlight::HighlightRepository, shelf::ShelfRepository},
        error::AppError,
        model::book::{Book, CreateBookParam, UpdateBookParam},
        service::image::{ImageStore, COVER_BOUNDS},
        util::validation::ValidationErrors,
    },
};

pub struct BookService<'a> {
    db: &'a DatabaseConnection,
    covers: &'a ImageStore,
    highlight_images: &'a ImageStore,
}

impl<'a> BookService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        covers: &'a ImageStore,
        highlight_images: &'a ImageStore,
    ) -> Self {
        Self {
            db,
            covers,
            highlight_images,
        }
    }

    /// Resolves the `{isbn}` path segment within a user's library.
    ///
    /// # Returns
    /// - `Ok(Book)` - Book found
    /// - `Err(AppError::NotFound)` - User owns no book with that ISBN
    pub async fn find(&self, user_id: i32, isbn: &str) -> Result<Book, AppError> {
        BookRepository::new(self.db)
            .find_by_isbn(user_id, isbn)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Book {} not found for user {}", isbn, user_id))
            })
    }

    /// Validates and stores a new book.
    ///
    /// The outer result carries infrastructure failures, the inner one the form outcome
    /// so the caller can re-render the form with its messages.
    ///
    /// # Returns
    /// - `Ok(Ok(Book))` - Book created
    /// - `Ok(Err(ValidationErrors))` - Invalid fields or an ISBN already in the library
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(
        &self,
        user_id: i32,
        form: &BookFormDto,
    ) -> Result<Result<Book, ValidationErrors>, AppError> {
        let repo = BookRepository::new(self.db);

        let param = match CreateBookParam::from_form(user_id, form) {
            Ok(param) => param,
            Err(errors) => return Ok(Err(errors)),
        };

        if repo.isbn_exists(user_id, &param.isbn).await? {
            let mut errors = ValidationErrors::new();
            errors.add("isbn", "ISBN is already in your library");
            return Ok(Err(errors));
        }

        let book = repo.create(param).await?;
        tracing::debug!("User {} added book {}", user_id, book.isbn);

        Ok(Ok(book))
    }

    pub async fn update(&self, book: &Book, param: UpdateBookParam) -> Result<Book, AppError> {
        Ok(BookRepository::new(self.db).update(book.id, param).await?)
    }

    /// Places a book on one of its owner's shelves, or unshelves it with `None`.
    ///
    /// # Returns
    /// - `Ok(())` - Shelf reference updated
    /// - `Err(AppError::BadRequest)` - Shelf does not exist or belongs to another user
    pub async fn assign_shelf(&self, book: &Book, shelf_id: Option<i32>) -> Result<(), AppError> {
        if let Some(shelf_id) = shelf_id {
            let shelf = ShelfRepository::new(self.db)
                .find_for_user(book.user_id, shelf_id)
                .await?;

            if shelf.is_none() {
                return Err(AppError::BadRequest("Unknown shelf".to_string()));
            }
        }

        BookRepository::new(self.db)
            .set_shelf(book.id, shelf_id)
            .await?;

        Ok(())
    }

    /// Stores a new cover for the book, then removes the one it replaces.
    pub async fn set_cover(&self, book: &Book, image: DynamicImage) -> Result<(), AppError> {
        let name = self.covers.upload(image, COVER_BOUNDS).await?;

        if let Err(err) = BookRepository::new(self.db)
            .set_image(book.id, Some(name.clone()))
            .await
        {
            self.covers.discard(&name).await;
            return Err(match err {
                DbErr::RecordNotUpdated => AppError::NotFound(format!("Book {}", book.id)),
                err => err.into(),
            });
        }

        if let Some(old) = &book.image {
            self.covers.delete(old).await?;
        }

        Ok(())
    }

    /// Deletes the book with its highlights, then their image files.
    pub async fn delete(&self, book: &Book) -> Result<(), AppError> {
        let highlights = HighlightRepository::new(self.db)
            .get_by_book(book.id)
            .await?;

        BookRepository::new(self.db).delete(book.id).await?;
        tracing::debug!("User {} deleted book {}", book.user_id, book.isbn);

        if let Some(cover) = &book.image {
            self.covers.delete(cover).await?;
        }
        for image in highlights.iter().filter_map(|h| h.image.as_deref()) {
            self.highlight_images.delete(image).await?;
        }

        Ok(())
    }
}
