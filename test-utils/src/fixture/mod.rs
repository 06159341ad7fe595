//! Test fixtures providing reusable entity models without database insertion.
//!
//! Fixtures build in-memory models for unit tests of business logic such as permission
//! checks and DTO conversion. Unlike factories, fixtures do NOT insert data.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let owner = fixture::user::entity();
//! let stranger = fixture::user::entity_builder().id(2).slug("stranger").build();
//! let book = fixture::book::entity_builder().user_id(owner.id).build();
//! ```

pub mod book;
pub mod shelf;
pub mod user;

pub use book::{entity as book_entity, entity_builder as book_entity_builder};
pub use shelf::{entity as shelf_entity, entity_builder as shelf_entity_builder};
pub use user::{entity as user_entity, entity_builder as user_entity_builder};
