//! User service for profile lookups and edits.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{book::BookRepository, shelf::ShelfRepository, user::UserRepository},
    error::AppError,
    model::{
        shelf::ShelfWithBooks,
        user::{UpdateUserParam, User, UserProfile},
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the `{user}` path segment.
    ///
    /// # Returns
    /// - `Ok(User)` - User with that slug
    /// - `Err(AppError::NotFound)` - Unknown slug
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_slug(&self, slug: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with slug {} not found", slug)))
    }

    /// Builds the profile page contents for a user.
    ///
    /// Books are grouped onto their shelves in shelf position order. Books without a
    /// shelf, or whose shelf is not one of the user's, end up in `unshelved`.
    pub async fn profile(&self, user: &User) -> Result<UserProfile, AppError> {
        let shelves = ShelfRepository::new(self.db).get_by_user(user.id).await?;
        let books = BookRepository::new(self.db).get_by_user(user.id).await?;

        let mut shelves: Vec<ShelfWithBooks> = shelves
            .into_iter()
            .map(|shelf| ShelfWithBooks {
                shelf,
                books: Vec::new(),
            })
            .collect();
        let mut unshelved = Vec::new();

        for book in books {
            let slot = book
                .shelf_id
                .and_then(|id| shelves.iter_mut().find(|s| s.shelf.id == id));

            match slot {
                Some(shelf) => shelf.books.push(book),
                None => unshelved.push(book),
            }
        }

        Ok(UserProfile { shelves, unshelved })
    }

    pub async fn update(&self, user: &User, param: UpdateUserParam) -> Result<User, AppError> {
        let user = UserRepository::new(self.db).update(user.id, param).await?;
        Ok(user)
    }
}
