use super::*;

/// Tests that ISBN lookup is scoped to the owner.
///
/// Expected: Ok(Some) for the owner, Ok(None) for another user
#[tokio::test]
async fn scopes_lookup_to_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, book) = factory::helpers::create_book_with_owner(db).await?;
    let other = factory::create_user(db).await?;

    let repo = BookRepository::new(db);

    let found = repo.find_by_isbn(user.id, &book.isbn).await?;
    assert_eq!(found.map(|b| b.id), Some(book.id));
    assert!(repo.find_by_isbn(other.id, &book.isbn).await?.is_none());

    Ok(())
}
