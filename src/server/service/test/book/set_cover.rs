use super::*;

/// Tests replacing a book cover.
///
/// Verifies the new file is stored and referenced while the old file is removed.
///
/// Expected: Ok with exactly one cover file on disk
#[tokio::test]
async fn replaces_previous_cover() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let stores = Stores::new().await;
    let (user, book) = factory::helpers::create_book_with_owner(db).await?;

    let service = BookService::new(db, &stores.covers, &stores.highlights);

    service
        .set_cover(&Book::from_entity(book.clone()), blank_image(200, 300))
        .await?;
    let first = service.find(user.id, &book.isbn).await?;
    let first_name = first.image.clone().unwrap();

    service.set_cover(&first, blank_image(200, 300)).await?;
    let second = service.find(user.id, &book.isbn).await?;
    let second_name = second.image.clone().unwrap();

    assert_ne!(first_name, second_name);
    assert!(!stores.covers.dir().join(&first_name).exists());
    assert!(stores.covers.dir().join(&second_name).exists());
    assert_eq!(second.cover_url(), format!("/books/image/{}", second_name));

    Ok(())
}

/// Tests uploading a cover for a book deleted after it was loaded.
///
/// Verifies the uploaded file is removed again when the record cannot be updated.
///
/// Expected: Err(NotFound) with no cover file left on disk
#[tokio::test]
async fn discards_upload_when_book_is_gone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let stores = Stores::new().await;
    let (_, book) = factory::helpers::create_book_with_owner(db).await?;
    let stale = Book::from_entity(book.clone());

    entity::prelude::Book::delete_by_id(book.id).exec(db).await?;

    let service = BookService::new(db, &stores.covers, &stores.highlights);
    let result = service.set_cover(&stale, blank_image(200, 300)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(std::fs::read_dir(stores.covers.dir()).unwrap().count(), 0);

    Ok(())
}
