//! Shelf factory for creating test shelves.
//!
//! Shelves are appended after the owner's current last position unless a position is set
//! explicitly, which keeps factory-built shelves dense and 1-based.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

/// Factory for creating test shelves with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let shelf = ShelfFactory::new(&db, user.id)
///     .name("Favorites")
///     .build()
///     .await?;
/// ```
pub struct ShelfFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    name: String,
    position: Option<i32>,
}

impl<'a> ShelfFactory<'a> {
    /// Creates a new ShelfFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Shelf {id}"`
    /// - position: one past the owner's current shelf count
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            name: format!("Shelf {}", next_id()),
            position: None,
        }
    }

    /// Sets the shelf name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets an explicit position instead of appending.
    pub fn position(mut self, position: i32) -> Self {
        self.position = Some(position);
        self
    }

    /// Builds and inserts the shelf entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::shelf::Model)` - Created shelf entity
    /// - `Err(DbErr)` - Database error during insert, including position collisions
    pub async fn build(self) -> Result<entity::shelf::Model, DbErr> {
        let position = match self.position {
            Some(position) => position,
            None => {
                let count = entity::prelude::Shelf::find()
                    .filter(entity::shelf::Column::UserId.eq(self.user_id))
                    .count(self.db)
                    .await?;
                count as i32 + 1
            }
        };
        let now = Utc::now();

        entity::shelf::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            position: ActiveValue::Set(position),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a shelf with default values at the end of the owner's list.
pub async fn create_shelf(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::shelf::Model, DbErr> {
    ShelfFactory::new(db, user_id).build().await
}

/// Creates `count` shelves for the user, returned in position order.
pub async fn create_shelves(
    db: &DatabaseConnection,
    user_id: i32,
    count: usize,
) -> Result<Vec<entity::shelf::Model>, DbErr> {
    let mut shelves = Vec::with_capacity(count);
    for _ in 0..count {
        shelves.push(create_shelf(db, user_id).await?);
    }

    Ok(shelves)
}
