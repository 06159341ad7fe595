//! Highlight data repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::highlight::{Highlight, HighlightParam};

pub struct HighlightRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HighlightRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a book's highlights ordered by page.
    pub async fn get_by_book(&self, book_id: i32) -> Result<Vec<Highlight>, DbErr> {
        let entities = entity::prelude::Highlight::find()
            .filter(entity::highlight::Column::BookId.eq(book_id))
            .order_by_asc(entity::highlight::Column::Page)
            .order_by_asc(entity::highlight::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Highlight::from_entity).collect())
    }

    /// Finds a highlight by id, scoped to its book.
    pub async fn find_for_book(
        &self,
        book_id: i32,
        highlight_id: i32,
    ) -> Result<Option<Highlight>, DbErr> {
        let entity = entity::prelude::Highlight::find_by_id(highlight_id)
            .filter(entity::highlight::Column::BookId.eq(book_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Highlight::from_entity))
    }

    pub async fn create(&self, book_id: i32, param: HighlightParam) -> Result<Highlight, DbErr> {
        let now = Utc::now();

        let entity = entity::highlight::ActiveModel {
            book_id: ActiveValue::Set(book_id),
            page: ActiveValue::Set(param.page),
            content: ActiveValue::Set(param.content),
            image: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Highlight::from_entity(entity))
    }

    pub async fn update(
        &self,
        highlight_id: i32,
        param: HighlightParam,
    ) -> Result<Highlight, DbErr> {
        let entity = entity::highlight::ActiveModel {
            id: ActiveValue::Unchanged(highlight_id),
            page: ActiveValue::Set(param.page),
            content: ActiveValue::Set(param.content),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Highlight::from_entity(entity))
    }

    /// Stores the image file name.
    ///
    /// Fails with `DbErr::RecordNotUpdated` when the highlight no longer exists.
    pub async fn set_image(&self, highlight_id: i32, image: Option<String>) -> Result<(), DbErr> {
        let result = entity::prelude::Highlight::update_many()
            .col_expr(entity::highlight::Column::Image, Expr::value(image))
            .col_expr(entity::highlight::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::highlight::Column::Id.eq(highlight_id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotUpdated);
        }

        Ok(())
    }

    pub async fn delete(&self, highlight_id: i32) -> Result<(), DbErr> {
        entity::prelude::Highlight::delete_by_id(highlight_id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
