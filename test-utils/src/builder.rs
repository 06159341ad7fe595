use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Unique index keeping a user's shelf positions distinct.
const SHELF_POSITION_INDEX: &str =
    "CREATE UNIQUE INDEX idx_shelf_user_id_position ON shelf (user_id, position)";

/// Unique index keeping ISBNs distinct within a user's library.
const BOOK_ISBN_INDEX: &str = "CREATE UNIQUE INDEX idx_book_user_id_isbn ON book (user_id, isbn)";

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Shelf};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Shelf)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements generated from entities, executed in insertion order.
    tables: Vec<TableCreateStatement>,
    /// Raw index statements executed after every table exists.
    indexes: Vec<String>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys should be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds a raw `CREATE INDEX` statement run after the tables are created.
    pub fn with_index(mut self, statement: impl Into<String>) -> Self {
        self.indexes.push(statement.into());
        self
    }

    /// Adds every table of the library schema along with its unique indexes.
    ///
    /// Tables are added in dependency order:
    /// - User
    /// - Shelf
    /// - Book
    /// - Highlight
    ///
    /// The `(user_id, position)` shelf index and `(user_id, isbn)` book index match the
    /// production migrations so ordering and duplicate-ISBN behavior can be tested.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_library_tables(self) -> Self {
        self.with_table(User)
            .with_table(Shelf)
            .with_table(Book)
            .with_table(Highlight)
            .with_index(SHELF_POSITION_INDEX)
            .with_index(BOOK_ISBN_INDEX)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection, executes all CREATE TABLE
    /// statements, then all index statements.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create the schema
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}
