//! User data repository for database operations.
//!
//! Provides the `UserRepository` for creating users on login, looking them up by id or
//! slug, and saving profile edits.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use uuid::Uuid;

use crate::server::model::user::{UpdateUserParam, UpsertUserParam, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a user keyed on email.
    ///
    /// Inserts a new user with a random UUID slug, or refreshes the name and avatar of
    /// the existing user with the same email. The slug of an existing user never changes.
    ///
    /// # Arguments
    /// - `param` - Identity returned by the OAuth provider
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            image: ActiveValue::Set(param.image),
            slug: ActiveValue::Set(Uuid::new_v4().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::Email)
                .update_columns([
                    entity::user::Column::Name,
                    entity::user::Column::Image,
                    entity::user::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by URL slug.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that slug
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Saves profile edits.
    ///
    /// # Arguments
    /// - `user_id` - User to update
    /// - `param` - Validated profile fields, `None` clearing a value
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotFound)` - No user with that id
    pub async fn update(&self, user_id: i32, param: UpdateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            id: ActiveValue::Unchanged(user_id),
            description: ActiveValue::Set(param.description),
            amazon_associates_id: ActiveValue::Set(param.amazon_associates_id),
            facebook: ActiveValue::Set(param.facebook),
            twitter: ActiveValue::Set(param.twitter),
            linkedin: ActiveValue::Set(param.linkedin),
            instagram: ActiveValue::Set(param.instagram),
            phone: ActiveValue::Set(param.phone),
            whatsapp: ActiveValue::Set(param.whatsapp),
            telegram: ActiveValue::Set(param.telegram),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }
}
