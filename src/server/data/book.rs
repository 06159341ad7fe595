//! Book data repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::book::{Book, CreateBookParam, UpdateBookParam};

pub struct BookRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every book owned by a user, oldest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Book>, DbErr> {
        let entities = entity::prelude::Book::find()
            .filter(entity::book::Column::UserId.eq(user_id))
            .order_by_asc(entity::book::Column::CreatedAt)
            .order_by_asc(entity::book::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Book::from_entity).collect())
    }

    /// Finds a book by ISBN within a user's library.
    ///
    /// # Returns
    /// - `Ok(Some(Book))` - Book found
    /// - `Ok(None)` - User has no book with that ISBN
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_isbn(&self, user_id: i32, isbn: &str) -> Result<Option<Book>, DbErr> {
        let entity = entity::prelude::Book::find()
            .filter(entity::book::Column::UserId.eq(user_id))
            .filter(entity::book::Column::Isbn.eq(isbn))
            .one(self.db)
            .await?;

        Ok(entity.map(Book::from_entity))
    }

    /// Checks whether a user already owns a book with this ISBN.
    pub async fn isbn_exists(&self, user_id: i32, isbn: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Book::find()
            .filter(entity::book::Column::UserId.eq(user_id))
            .filter(entity::book::Column::Isbn.eq(isbn))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a new unshelved book.
    pub async fn create(&self, param: CreateBookParam) -> Result<Book, DbErr> {
        let now = Utc::now();

        let entity = entity::book::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            shelf_id: ActiveValue::Set(None),
            isbn: ActiveValue::Set(param.isbn),
            title: ActiveValue::Set(param.title),
            subtitle: ActiveValue::Set(param.subtitle),
            author: ActiveValue::Set(param.author),
            description: ActiveValue::Set(param.description),
            publisher: ActiveValue::Set(param.publisher),
            page_count: ActiveValue::Set(param.page_count),
            image: ActiveValue::Set(None),
            google_books_id: ActiveValue::Set(param.google_books_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Book::from_entity(entity))
    }

    /// Updates the editable fields of a book.
    pub async fn update(&self, book_id: i32, param: UpdateBookParam) -> Result<Book, DbErr> {
        let entity = entity::book::ActiveModel {
            id: ActiveValue::Unchanged(book_id),
            title: ActiveValue::Set(param.title),
            subtitle: ActiveValue::Set(param.subtitle),
            author: ActiveValue::Set(param.author),
            description: ActiveValue::Set(param.description),
            publisher: ActiveValue::Set(param.publisher),
            page_count: ActiveValue::Set(param.page_count),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Book::from_entity(entity))
    }

    /// Places a book on a shelf, or unshelves it with `None`.
    ///
    /// Ownership of the shelf is checked by the caller.
    pub async fn set_shelf(&self, book_id: i32, shelf_id: Option<i32>) -> Result<(), DbErr> {
        entity::prelude::Book::update_many()
            .col_expr(entity::book::Column::ShelfId, Expr::value(shelf_id))
            .col_expr(entity::book::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::book::Column::Id.eq(book_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Stores the cover file name.
    ///
    /// Fails with `DbErr::RecordNotUpdated` when the book no longer exists.
    pub async fn set_image(&self, book_id: i32, image: Option<String>) -> Result<(), DbErr> {
        let result = entity::prelude::Book::update_many()
            .col_expr(entity::book::Column::Image, Expr::value(image))
            .col_expr(entity::book::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::book::Column::Id.eq(book_id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotUpdated);
        }

        Ok(())
    }

    /// Deletes a book together with its highlights in one transaction.
    pub async fn delete(&self, book_id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Highlight::delete_many()
            .filter(entity::highlight::Column::BookId.eq(book_id))
            .exec(&txn)
            .await?;

        entity::prelude::Book::delete_by_id(book_id)
            .exec(&txn)
            .await?;

        txn.commit().await
    }
}
