//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and handed
//! to views. Parameter types are built from validated form DTOs and consumed by the
//! service and data layers.

pub mod book;
pub mod google_books;
pub mod highlight;
pub mod shelf;
pub mod user;
