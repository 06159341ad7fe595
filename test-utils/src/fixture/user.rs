//! User fixtures for creating in-memory test data.

use chrono::Utc;
use entity::user;

/// Default test user id.
pub const DEFAULT_ID: i32 = 1;

/// Default test user name.
pub const DEFAULT_NAME: &str = "Test User";

/// Default test user email.
pub const DEFAULT_EMAIL: &str = "test.user@example.com";

/// Default test user slug.
pub const DEFAULT_SLUG: &str = "test-user";

/// Creates a user entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test User"`
/// - email: `"test.user@example.com"`
/// - slug: `"test-user"`
/// - every optional profile field: `None`
pub fn entity() -> user::Model {
    entity_builder().build()
}

/// Creates a user entity builder for customizing test data.
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder::default()
}

/// Builder for creating customized user entity models.
pub struct UserEntityBuilder {
    id: i32,
    name: String,
    email: String,
    slug: String,
    description: Option<String>,
}

impl Default for UserEntityBuilder {
    fn default() -> Self {
        Self {
            id: DEFAULT_ID,
            name: DEFAULT_NAME.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            slug: DEFAULT_SLUG.to_string(),
            description: None,
        }
    }
}

impl UserEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Builds the user entity model.
    pub fn build(self) -> user::Model {
        let now = Utc::now();

        user::Model {
            id: self.id,
            name: self.name,
            email: self.email,
            image: None,
            slug: self.slug,
            description: self.description,
            facebook: None,
            twitter: None,
            linkedin: None,
            instagram: None,
            phone: None,
            whatsapp: None,
            telegram: None,
            amazon_associates_id: None,
            created_at: now,
            updated_at: now,
        }
    }
}
