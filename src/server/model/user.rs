//! User domain models and parameters.

use crate::{
    model::user::UserFormDto,
    server::{
        model::{book::Book, shelf::ShelfWithBooks},
        util::validation::ValidationErrors,
    },
};

/// Library owner identified by email, addressed in URLs by slug.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Avatar URL from the identity provider.
    pub image: Option<String>,
    pub slug: String,
    pub description: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub telegram: Option<String>,
    pub amazon_associates_id: Option<String>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            image: entity.image,
            slug: entity.slug,
            description: entity.description,
            facebook: entity.facebook,
            twitter: entity.twitter,
            linkedin: entity.linkedin,
            instagram: entity.instagram,
            phone: entity.phone,
            whatsapp: entity.whatsapp,
            telegram: entity.telegram,
            amazon_associates_id: entity.amazon_associates_id,
        }
    }

    /// Pre-fills the edit form with the stored profile.
    pub fn to_form(&self) -> UserFormDto {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();

        UserFormDto {
            csrf_token: String::new(),
            description: text(&self.description),
            amazon_associates_id: text(&self.amazon_associates_id),
            facebook: text(&self.facebook),
            twitter: text(&self.twitter),
            linkedin: text(&self.linkedin),
            instagram: text(&self.instagram),
            phone: text(&self.phone),
            whatsapp: text(&self.whatsapp),
            telegram: text(&self.telegram),
        }
    }
}

/// Everything shown on a user's profile page.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    /// Shelves in position order with their books.
    pub shelves: Vec<ShelfWithBooks>,
    /// Books not placed on any shelf.
    pub unshelved: Vec<Book>,
}

/// Parameters for creating or refreshing a user after an OAuth login.
///
/// Users are matched on email. Name and image are refreshed on every login while the
/// slug is only generated when the user is first inserted.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub email: String,
    pub name: String,
    pub image: Option<String>,
}

/// Validated profile changes. `None` clears the stored value.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateUserParam {
    pub description: Option<String>,
    pub amazon_associates_id: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub telegram: Option<String>,
}

impl UpdateUserParam {
    /// Validates the submitted profile form.
    ///
    /// # Returns
    /// - `Ok(UpdateUserParam)` - Every field within its length limit
    /// - `Err(ValidationErrors)` - Messages keyed by form field
    pub fn from_form(form: &UserFormDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.length("description", "Description", &form.description, 0, 500);

        let social = [
            ("amazon_associates_id", "Amazon Associates ID", &form.amazon_associates_id),
            ("facebook", "Facebook", &form.facebook),
            ("twitter", "Twitter", &form.twitter),
            ("linkedin", "Linkedin", &form.linkedin),
            ("instagram", "Instagram", &form.instagram),
            ("phone", "Phone", &form.phone),
            ("whatsapp", "Whatsapp", &form.whatsapp),
            ("telegram", "Telegram", &form.telegram),
        ];
        for (field, label, value) in social {
            errors.length(field, label, value, 0, 50);
        }

        errors.into_result(Self {
            description: non_blank(&form.description),
            amazon_associates_id: non_blank(&form.amazon_associates_id),
            facebook: non_blank(&form.facebook),
            twitter: non_blank(&form.twitter),
            linkedin: non_blank(&form.linkedin),
            instagram: non_blank(&form.instagram),
            phone: non_blank(&form.phone),
            whatsapp: non_blank(&form.whatsapp),
            telegram: non_blank(&form.telegram),
        })
    }
}

/// Trims input, mapping blank strings to `None`.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
