//! Shelf fixtures for creating in-memory test data.

use chrono::Utc;
use entity::shelf;

/// Default test shelf name.
pub const DEFAULT_NAME: &str = "Test Shelf";

/// Creates a shelf entity model owned by user `1` at position `1`.
pub fn entity() -> shelf::Model {
    entity_builder().build()
}

/// Creates a shelf entity builder for customizing test data.
pub fn entity_builder() -> ShelfEntityBuilder {
    ShelfEntityBuilder::default()
}

/// Builder for creating customized shelf entity models.
pub struct ShelfEntityBuilder {
    id: i32,
    user_id: i32,
    name: String,
    position: i32,
}

impl Default for ShelfEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            user_id: 1,
            name: DEFAULT_NAME.to_string(),
            position: 1,
        }
    }
}

impl ShelfEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    /// Builds the shelf entity model.
    pub fn build(self) -> shelf::Model {
        let now = Utc::now();

        shelf::Model {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            position: self.position,
            created_at: now,
            updated_at: now,
        }
    }
}
