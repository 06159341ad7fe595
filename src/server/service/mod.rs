//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They apply the rules that
//! need more than one repository or the filesystem (ISBN uniqueness, shelf ownership,
//! reorder bounds, image files) and work with domain models rather than DTOs or entity
//! models.

pub mod auth;
pub mod book;
pub mod google_books;
pub mod highlight;
pub mod image;
pub mod shelf;
pub mod user;

#[cfg(test)]
mod test;
