use super::*;
use crate::server::service::highlight::HighlightService;

/// Tests deleting a book with a cover and illustrated highlights.
///
/// Verifies the book row, its highlights and every image file are removed.
///
/// Expected: Ok with no rows and no files left
#[tokio::test]
async fn removes_highlights_and_image_files() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let stores = Stores::new().await;
    let (user, book, highlight) = factory::helpers::create_highlight_with_dependencies(db).await?;

    let books = BookService::new(db, &stores.covers, &stores.highlights);
    let highlights = HighlightService::new(db, &stores.highlights);

    books
        .set_cover(&Book::from_entity(book.clone()), blank_image(100, 150))
        .await?;
    let highlight = highlights.find(book.id, highlight.id).await?;
    highlights.set_image(&highlight, blank_image(50, 50)).await?;

    let book = books.find(user.id, &book.isbn).await?;
    let cover = book.image.clone().unwrap();
    let highlight_image = highlights.find(book.id, highlight.id).await?.image.unwrap();
    assert!(stores.covers.dir().join(&cover).exists());
    assert!(stores.highlights.dir().join(&highlight_image).exists());

    books.delete(&book).await?;

    assert!(entity::prelude::Book::find().all(db).await?.is_empty());
    assert!(entity::prelude::Highlight::find().all(db).await?.is_empty());
    assert!(!stores.covers.dir().join(&cover).exists());
    assert!(!stores.highlights.dir().join(&highlight_image).exists());

    Ok(())
}

/// Tests deleting a book whose cover file is already gone.
///
/// Expected: Ok, the missing file is ignored
#[tokio::test]
async fn tolerates_missing_cover_file() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let stores = Stores::new().await;
    let user = factory::create_user(db).await?;
    let book = factory::book::BookFactory::new(db, user.id)
        .image(Some("00000000-0000-4000-8000-000000000000".to_string()))
        .build()
        .await?;

    let service = BookService::new(db, &stores.covers, &stores.highlights);
    service.delete(&Book::from_entity(book)).await?;

    assert!(entity::prelude::Book::find().all(db).await?.is_empty());

    Ok(())
}
