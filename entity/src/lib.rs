//! SeaORM entities for the library schema.

pub mod prelude;

pub mod book;
pub mod highlight;
pub mod shelf;
pub mod user;
