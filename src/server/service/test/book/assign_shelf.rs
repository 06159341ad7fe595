use super::*;

/// Tests placing a book on the owner's shelf and taking it off again.
///
/// Expected: Ok, shelf id set then cleared
#[tokio::test]
async fn assigns_and_unshelves() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let stores = Stores::new().await;
    let (user, book) = factory::helpers::create_book_with_owner(db).await?;
    let shelf = factory::create_shelf(db, user.id).await?;
    let book = Book::from_entity(book);

    let service = BookService::new(db, &stores.covers, &stores.highlights);

    service.assign_shelf(&book, Some(shelf.id)).await?;
    let stored = service.find(user.id, &book.isbn).await?;
    assert_eq!(stored.shelf_id, Some(shelf.id));

    service.assign_shelf(&stored, None).await?;
    let stored = service.find(user.id, &book.isbn).await?;
    assert_eq!(stored.shelf_id, None);

    Ok(())
}

/// Tests assigning a book to a shelf owned by someone else.
///
/// Expected: Err(BadRequest) and the book stays unshelved
#[tokio::test]
async fn rejects_other_users_shelf() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let stores = Stores::new().await;
    let (user, book) = factory::helpers::create_book_with_owner(db).await?;
    let other = factory::create_user(db).await?;
    let foreign_shelf = factory::create_shelf(db, other.id).await?;
    let book = Book::from_entity(book);

    let service = BookService::new(db, &stores.covers, &stores.highlights);
    let result = service.assign_shelf(&book, Some(foreign_shelf.id)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(service.find(user.id, &book.isbn).await?.shelf_id, None);

    Ok(())
}
