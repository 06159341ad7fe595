//! Shelf service: creation, renaming, reordering and deletion.
//!
//! Position bounds are checked here before the repository swaps rows, so a reorder
//! that would leave `1..=n` never reaches the database.

use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::shelf::ShelfRepository,
    error::AppError,
    model::shelf::{MoveDirection, Shelf, ShelfParam},
};

pub struct ShelfService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShelfService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, user_id: i32) -> Result<Vec<Shelf>, AppError> {
        Ok(ShelfRepository::new(self.db).get_by_user(user_id).await?)
    }

    /// Resolves the `{shelf}` path segment for a user.
    ///
    /// # Returns
    /// - `Ok(Shelf)` - Shelf owned by `user_id`
    /// - `Err(AppError::NotFound)` - Unknown id or a shelf of another user
    pub async fn find(&self, user_id: i32, shelf_id: i32) -> Result<Shelf, AppError> {
        ShelfRepository::new(self.db)
            .find_for_user(user_id, shelf_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Shelf {} not found for user {}", shelf_id, user_id))
            })
    }

    /// Highest position among the user's shelves, `0` when they have none.
    pub async fn last_position(&self, user_id: i32) -> Result<i32, AppError> {
        Ok(ShelfRepository::new(self.db).last_position(user_id).await?)
    }

    pub async fn create(&self, user_id: i32, param: ShelfParam) -> Result<Shelf, AppError> {
        let shelf = ShelfRepository::new(self.db).create(user_id, param).await?;
        tracing::debug!("Created shelf {} at position {}", shelf.id, shelf.position);

        Ok(shelf)
    }

    pub async fn rename(&self, shelf: &Shelf, param: ShelfParam) -> Result<Shelf, AppError> {
        Ok(ShelfRepository::new(self.db).rename(shelf.id, param).await?)
    }

    /// Swaps a shelf with the one before it.
    ///
    /// # Returns
    /// - `Ok(())` - Positions exchanged
    /// - `Err(AppError::BadRequest)` - Shelf is already first
    pub async fn move_up(&self, shelf: &Shelf) -> Result<(), AppError> {
        if shelf.position <= 1 {
            return Err(AppError::BadRequest(
                "The first shelf can't be moved up".to_string(),
            ));
        }

        self.swap(shelf, MoveDirection::Up).await
    }

    /// Swaps a shelf with the one after it.
    ///
    /// # Returns
    /// - `Ok(())` - Positions exchanged
    /// - `Err(AppError::BadRequest)` - Shelf is already last
    pub async fn move_down(&self, shelf: &Shelf) -> Result<(), AppError> {
        let last = self.last_position(shelf.user_id).await?;
        if shelf.position >= last {
            return Err(AppError::BadRequest(
                "The last shelf can't be moved down".to_string(),
            ));
        }

        self.swap(shelf, MoveDirection::Down).await
    }

    /// Deletes a shelf, unshelving its books and closing the gap in positions.
    pub async fn delete(&self, shelf: &Shelf) -> Result<(), AppError> {
        ShelfRepository::new(self.db).delete(shelf).await?;
        tracing::debug!("Deleted shelf {} of user {}", shelf.id, shelf.user_id);

        Ok(())
    }

    /// A shelf that reached the edge after the caller loaded it is a bad request.
    async fn swap(&self, shelf: &Shelf, direction: MoveDirection) -> Result<(), AppError> {
        match ShelfRepository::new(self.db).swap(shelf, direction).await {
            Ok(()) => Ok(()),
            Err(DbErr::RecordNotFound(msg)) => {
                tracing::debug!("Rejected shelf move: {}", msg);
                Err(AppError::BadRequest(
                    "The shelf can't be moved any further".to_string(),
                ))
            }
            Err(err) => Err(err.into()),
        }
    }
}
