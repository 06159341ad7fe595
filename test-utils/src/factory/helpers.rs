//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and one book owned by that user.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, book))` - Created owner and book
/// - `Err(DbErr)` - Database error during creation
pub async fn create_book_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::book::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let book = crate::factory::book::create_book(db, user.id).await?;

    Ok((user, book))
}

/// Creates a user, a book owned by that user and one highlight on the book.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, book, highlight))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_highlight_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::book::Model,
        entity::highlight::Model,
    ),
    DbErr,
> {
    let (user, book) = create_book_with_owner(db).await?;
    let highlight = crate::factory::highlight::create_highlight(db, book.id).await?;

    Ok((user, book, highlight))
}
