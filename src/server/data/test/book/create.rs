use super::*;

/// Tests adding a book.
///
/// Expected: Ok with an unshelved book without cover
#[tokio::test]
async fn creates_unshelved_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = BookRepository::new(db);
    let book = repo.create(create_param(user.id, "9780306406157")).await?;

    assert_eq!(book.user_id, user.id);
    assert_eq!(book.shelf_id, None);
    assert_eq!(book.image, None);
    assert!(repo.isbn_exists(user.id, "9780306406157").await?);

    Ok(())
}

/// Tests that an ISBN is unique per owner only.
///
/// Expected: Err for the same owner, Ok for another owner
#[tokio::test]
async fn isbn_unique_per_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let repo = BookRepository::new(db);
    repo.create(create_param(user.id, "9780306406157")).await?;

    assert!(repo
        .create(create_param(user.id, "9780306406157"))
        .await
        .is_err());
    assert!(repo
        .create(create_param(other.id, "9780306406157"))
        .await
        .is_ok());
    assert!(!repo.isbn_exists(user.id, "9781861972712").await?);

    Ok(())
}
