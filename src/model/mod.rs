//! Form payloads deserialized from browser requests.
//!
//! DTOs keep submitted values as plain strings. They are validated and converted into
//! server-side parameter types before anything is written.

pub mod book;
pub mod common;
pub mod highlight;
pub mod shelf;
pub mod user;
