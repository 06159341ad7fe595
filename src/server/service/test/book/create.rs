use super::*;

/// Tests adding a valid book.
///
/// Expected: Ok(Ok(Book)) unshelved and owned by the user
#[tokio::test]
async fn creates_valid_book() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let stores = Stores::new().await;
    let user = factory::create_user(db).await?;

    let service = BookService::new(db, &stores.covers, &stores.highlights);
    let book = service
        .create(user.id, &book_form("9780306406157"))
        .await?
        .unwrap();

    assert_eq!(book.user_id, user.id);
    assert_eq!(book.page_count, 777);
    assert_eq!(book.shelf_id, None);

    Ok(())
}

/// Tests adding an ISBN the user already owns.
///
/// Expected: Ok(Err(ValidationErrors)) with a message on `isbn`
#[tokio::test]
async fn duplicate_isbn_is_validation_error() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let stores = Stores::new().await;
    let user = factory::create_user(db).await?;

    let service = BookService::new(db, &stores.covers, &stores.highlights);
    service
        .create(user.id, &book_form("9780306406157"))
        .await?
        .unwrap();

    let errors = service
        .create(user.id, &book_form("9780306406157"))
        .await?
        .unwrap_err();

    assert_eq!(errors.get("isbn").len(), 1);

    Ok(())
}

/// Tests that ISBNs are unique per owner only.
///
/// Expected: Ok(Ok(Book)) for a second user adding the same ISBN
#[tokio::test]
async fn same_isbn_for_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let stores = Stores::new().await;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let service = BookService::new(db, &stores.covers, &stores.highlights);
    service
        .create(first.id, &book_form("9780306406157"))
        .await?
        .unwrap();

    let result = service.create(second.id, &book_form("9780306406157")).await?;

    assert!(result.is_ok());

    Ok(())
}

/// Tests adding a book with an invalid checksum.
///
/// Expected: Ok(Err(ValidationErrors)) and nothing stored
#[tokio::test]
async fn invalid_isbn_is_not_stored() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let stores = Stores::new().await;
    let user = factory::create_user(db).await?;

    let service = BookService::new(db, &stores.covers, &stores.highlights);
    let result = service.create(user.id, &book_form("9780306406158")).await?;

    assert!(!result.unwrap_err().get("isbn").is_empty());
    assert!(entity::prelude::Book::find().all(db).await?.is_empty());

    Ok(())
}
