use crate::server::{
    data::shelf::ShelfRepository,
    model::shelf::{MoveDirection, Shelf, ShelfParam},
};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod rename;
mod swap;

/// Reads back `(name, position)` pairs of a user's shelves in position order.
async fn positions(db: &DatabaseConnection, user_id: i32) -> Result<Vec<(String, i32)>, DbErr> {
    let shelves = entity::prelude::Shelf::find()
        .filter(entity::shelf::Column::UserId.eq(user_id))
        .order_by_asc(entity::shelf::Column::Position)
        .all(db)
        .await?;

    Ok(shelves.into_iter().map(|s| (s.name, s.position)).collect())
}

/// Creates shelves named "A", "B", ... in order.
async fn named_shelves(
    db: &DatabaseConnection,
    user_id: i32,
    names: &[&str],
) -> Result<Vec<Shelf>, DbErr> {
    let repo = ShelfRepository::new(db);
    let mut shelves = Vec::new();
    for name in names {
        shelves.push(
            repo.create(
                user_id,
                ShelfParam {
                    name: name.to_string(),
                },
            )
            .await?,
        );
    }

    Ok(shelves)
}
