//! Database repository layer for all domain entities.
//!
//! Repositories wrap SeaORM entity queries for one table each and return domain models,
//! keeping entity types out of the service layer. Multi-row invariants (shelf positions,
//! cascading deletes) are enforced here inside database transactions.

pub mod book;
pub mod highlight;
pub mod shelf;
pub mod user;

#[cfg(test)]
mod test;
