//! Highlight domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{model::highlight::HighlightFormDto, server::util::validation::ValidationErrors};

/// Public URL prefix of uploaded highlight images.
pub const HIGHLIGHT_IMAGE_URL_PREFIX: &str = "/highlights/image";

/// Excerpt or note tied to a page of a book.
#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    pub id: i32,
    pub book_id: i32,
    pub page: i32,
    pub content: String,
    /// Stored image file name.
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Highlight {
    /// Converts an entity model to a highlight domain model at the repository boundary.
    pub fn from_entity(entity: entity::highlight::Model) -> Self {
        Self {
            id: entity.id,
            book_id: entity.book_id,
            page: entity.page,
            content: entity.content,
            image: entity.image,
            created_at: entity.created_at,
        }
    }

    pub fn image_url(&self) -> Option<String> {
        self.image
            .as_ref()
            .map(|image| format!("{}/{}", HIGHLIGHT_IMAGE_URL_PREFIX, image))
    }

    pub fn to_form(&self) -> HighlightFormDto {
        HighlightFormDto {
            csrf_token: String::new(),
            page: self.page.to_string(),
            content: self.content.clone(),
        }
    }
}

/// Validated highlight fields for create and edit.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightParam {
    pub page: i32,
    pub content: String,
}

impl HighlightParam {
    pub fn from_form(form: &HighlightFormDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.length("content", "Content", &form.content, 10, 500);
        let page = errors.int_min("page", "Page", &form.page, 0);

        errors.into_result(Self {
            page: page.unwrap_or_default(),
            content: form.content.trim().to_string(),
        })
    }
}
