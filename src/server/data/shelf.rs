//! Shelf data repository.
//!
//! Shelf positions form a dense `1..=n` sequence per user, protected by a unique
//! `(user_id, position)` index. Every operation that touches more than one position runs
//! in a single transaction, and writes are ordered so no intermediate state collides
//! with that index.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::shelf::{MoveDirection, Shelf, ShelfParam};

/// Position a shelf is parked at while it swaps with its neighbour.
const PARKED_POSITION: i32 = 0;

pub struct ShelfRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShelfRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user's shelves in position order.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Shelf>, DbErr> {
        let entities = entity::prelude::Shelf::find()
            .filter(entity::shelf::Column::UserId.eq(user_id))
            .order_by_asc(entity::shelf::Column::Position)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Shelf::from_entity).collect())
    }

    /// Finds a shelf by id, scoped to its owner.
    ///
    /// # Returns
    /// - `Ok(Some(Shelf))` - Shelf exists and belongs to `user_id`
    /// - `Ok(None)` - No such shelf for that user
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_for_user(&self, user_id: i32, shelf_id: i32) -> Result<Option<Shelf>, DbErr> {
        let entity = entity::prelude::Shelf::find_by_id(shelf_id)
            .filter(entity::shelf::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Shelf::from_entity))
    }

    /// Highest position among the user's shelves, `0` when they have none.
    pub async fn last_position(&self, user_id: i32) -> Result<i32, DbErr> {
        last_position(self.db, user_id).await
    }

    /// Appends a new shelf after the user's last one.
    ///
    /// The position is computed inside the inserting transaction.
    ///
    /// # Returns
    /// - `Ok(Shelf)` - Created shelf at `max(position) + 1`
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, user_id: i32, param: ShelfParam) -> Result<Shelf, DbErr> {
        let txn = self.db.begin().await?;

        let position = last_position(&txn, user_id).await? + 1;
        let now = Utc::now();

        let entity = entity::shelf::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(param.name),
            position: ActiveValue::Set(position),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(Shelf::from_entity(entity))
    }

    /// Renames a shelf. Position is untouched.
    pub async fn rename(&self, shelf_id: i32, param: ShelfParam) -> Result<Shelf, DbErr> {
        let entity = entity::shelf::ActiveModel {
            id: ActiveValue::Unchanged(shelf_id),
            name: ActiveValue::Set(param.name),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Shelf::from_entity(entity))
    }

    /// Swaps a shelf with its neighbour in the given direction.
    ///
    /// The position is re-read inside the transaction, so a `shelf` loaded before a
    /// concurrent reorder still moves relative to where it is now. The moving shelf is
    /// parked at position 0, the neighbour takes the vacated position, then the moving
    /// shelf takes the neighbour's old one.
    ///
    /// # Returns
    /// - `Ok(())` - Positions exchanged
    /// - `Err(DbErr::RecordNotFound)` - Shelf is gone or no neighbour exists in that direction
    /// - `Err(DbErr)` - Database error, the transaction is rolled back
    pub async fn swap(&self, shelf: &Shelf, direction: MoveDirection) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        let current = entity::prelude::Shelf::find_by_id(shelf.id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Shelf {} no longer exists", shelf.id)))?;
        let target = direction.target(current.position);

        let neighbour = entity::prelude::Shelf::find()
            .filter(entity::shelf::Column::UserId.eq(shelf.user_id))
            .filter(entity::shelf::Column::Position.eq(target))
            .one(&txn)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "No shelf at position {} for user {}",
                    target, shelf.user_id
                ))
            })?;

        set_position(&txn, current.id, PARKED_POSITION).await?;
        set_position(&txn, neighbour.id, current.position).await?;
        set_position(&txn, current.id, target).await?;

        txn.commit().await
    }

    /// Deletes a shelf and closes the gap it leaves.
    ///
    /// Books on the shelf are unshelved, the shelf row is removed, and every later shelf
    /// of the same user moves up by one, updated in ascending position order. Compaction
    /// uses the position stored at delete time rather than the one on `shelf`. Deleting a
    /// shelf that is already gone changes nothing.
    pub async fn delete(&self, shelf: &Shelf) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        let Some(current) = entity::prelude::Shelf::find_by_id(shelf.id).one(&txn).await? else {
            return txn.commit().await;
        };

        entity::prelude::Book::update_many()
            .col_expr(entity::book::Column::ShelfId, Expr::value(Option::<i32>::None))
            .filter(entity::book::Column::ShelfId.eq(shelf.id))
            .exec(&txn)
            .await?;

        entity::prelude::Shelf::delete_by_id(shelf.id)
            .exec(&txn)
            .await?;

        let later = entity::prelude::Shelf::find()
            .filter(entity::shelf::Column::UserId.eq(current.user_id))
            .filter(entity::shelf::Column::Position.gt(current.position))
            .order_by_asc(entity::shelf::Column::Position)
            .all(&txn)
            .await?;

        for entity in later {
            set_position(&txn, entity.id, entity.position - 1).await?;
        }

        txn.commit().await
    }
}

async fn last_position<C: ConnectionTrait>(conn: &C, user_id: i32) -> Result<i32, DbErr> {
    let last = entity::prelude::Shelf::find()
        .filter(entity::shelf::Column::UserId.eq(user_id))
        .order_by_desc(entity::shelf::Column::Position)
        .one(conn)
        .await?;

    Ok(last.map(|s| s.position).unwrap_or(0))
}

async fn set_position<C: ConnectionTrait>(
    conn: &C,
    shelf_id: i32,
    position: i32,
) -> Result<(), DbErr> {
    entity::prelude::Shelf::update_many()
        .col_expr(entity::shelf::Column::Position, Expr::value(position))
        .col_expr(entity::shelf::Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(entity::shelf::Column::Id.eq(shelf_id))
        .exec(conn)
        .await?;

    Ok(())
}
