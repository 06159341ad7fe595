//! Library Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the library
//! application. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, factories that insert rows with sensible defaults, and fixtures that build
//! entity models without touching a database.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert users, shelves, books and highlights
//! - **fixture**: In-memory entity models for pure unit tests
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_shelf_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_library_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     let user = factory::user::create_user(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
