//! Highlight service.
//!
//! Owns the lifecycle of highlight image files alongside the rows that reference them.

use image::DynamicImage;
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::highlight::HighlightRepository,
    error::AppError,
    model::highlight::{Highlight, HighlightParam},
    service::image::{ImageStore, HIGHLIGHT_BOUNDS},
};

pub struct HighlightService<'a> {
    db: &'a DatabaseConnection,
    images: &'a ImageStore,
}

impl<'a> HighlightService<'a> {
    pub fn new(db: &'a DatabaseConnection, images: &'a ImageStore) -> Self {
        Self { db, images }
    }

    /// Highlights of a book ordered by page.
    pub async fn list(&self, book_id: i32) -> Result<Vec<Highlight>, AppError> {
        Ok(HighlightRepository::new(self.db).get_by_book(book_id).await?)
    }

    /// Resolves a highlight id within a book.
    ///
    /// # Returns
    /// - `Ok(Highlight)` - Highlight belongs to `book_id`
    /// - `Err(AppError::NotFound)` - Unknown id or a highlight of another book
    pub async fn find(&self, book_id: i32, highlight_id: i32) -> Result<Highlight, AppError> {
        HighlightRepository::new(self.db)
            .find_for_book(book_id, highlight_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Highlight {} not found for book {}",
                    highlight_id, book_id
                ))
            })
    }

    pub async fn create(&self, book_id: i32, param: HighlightParam) -> Result<Highlight, AppError> {
        Ok(HighlightRepository::new(self.db).create(book_id, param).await?)
    }

    pub async fn update(
        &self,
        highlight: &Highlight,
        param: HighlightParam,
    ) -> Result<Highlight, AppError> {
        Ok(HighlightRepository::new(self.db)
            .update(highlight.id, param)
            .await?)
    }

    /// Stores a new image for the highlight, then removes the one it replaces.
    pub async fn set_image(&self, highlight: &Highlight, image: DynamicImage) -> Result<(), AppError> {
        let name = self.images.upload(image, HIGHLIGHT_BOUNDS).await?;

        if let Err(err) = HighlightRepository::new(self.db)
            .set_image(highlight.id, Some(name.clone()))
            .await
        {
            self.images.discard(&name).await;
            return Err(match err {
                DbErr::RecordNotUpdated => {
                    AppError::NotFound(format!("Highlight {}", highlight.id))
                }
                err => err.into(),
            });
        }

        if let Some(old) = &highlight.image {
            self.images.delete(old).await?;
        }

        Ok(())
    }

    /// Deletes the highlight and its image file.
    pub async fn delete(&self, highlight: &Highlight) -> Result<(), AppError> {
        HighlightRepository::new(self.db).delete(highlight.id).await?;

        if let Some(image) = &highlight.image {
            self.images.delete(image).await?;
        }

        Ok(())
    }
}
