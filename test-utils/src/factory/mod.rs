//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults so tests only spell out the fields they
//! care about. Each entity has a `Factory` builder for customization and a `create_*`
//! function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     let shelf = factory::create_shelf(&db, user.id).await?;
//!
//!     let (user, book) = factory::helpers::create_book_with_owner(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let book = factory::book::BookFactory::new(&db, user.id)
//!     .isbn("9780306406157")
//!     .shelf_id(Some(shelf.id))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `shelf` - Create shelves appended after the owner's last position
//! - `book` - Create book entities
//! - `highlight` - Create highlight entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod book;
pub mod helpers;
pub mod highlight;
pub mod shelf;
pub mod user;

pub use book::create_book;
pub use highlight::create_highlight;
pub use shelf::{create_shelf, create_shelves};
pub use user::create_user;
