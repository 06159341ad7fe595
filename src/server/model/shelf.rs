//! Shelf domain models and parameters.

use crate::{
    model::shelf::ShelfFormDto,
    server::{model::book::Book, util::validation::ValidationErrors},
};

/// Named, ordered grouping of a user's books.
#[derive(Debug, Clone, PartialEq)]
pub struct Shelf {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    /// Dense 1-based rank among the owner's shelves.
    pub position: i32,
}

impl Shelf {
    /// Converts an entity model to a shelf domain model at the repository boundary.
    pub fn from_entity(entity: entity::shelf::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            position: entity.position,
        }
    }
}

/// Shelf together with the books placed on it, for the profile page.
#[derive(Debug, Clone, PartialEq)]
pub struct ShelfWithBooks {
    pub shelf: Shelf,
    pub books: Vec<Book>,
}

/// Validated shelf name for create and rename.
#[derive(Debug, Clone, PartialEq)]
pub struct ShelfParam {
    pub name: String,
}

impl ShelfParam {
    pub fn from_form(form: &ShelfFormDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.present("name", "Name", &form.name);
        errors.length("name", "Name", &form.name, 0, 100);

        errors.into_result(Self {
            name: form.name.trim().to_string(),
        })
    }
}

/// Direction of a single-step reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

impl MoveDirection {
    /// Position of the neighbour the shelf swaps with.
    pub fn target(self, position: i32) -> i32 {
        match self {
            Self::Up => position - 1,
            Self::Down => position + 1,
        }
    }
}
