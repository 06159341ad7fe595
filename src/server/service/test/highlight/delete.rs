use super::*;

/// Tests deleting an illustrated highlight.
///
/// Expected: Ok with the row and its image file removed
#[tokio::test]
async fn removes_image_file() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let images = ImageStore::new(dir.path());
    let (_, book, highlight) = factory::helpers::create_highlight_with_dependencies(db).await?;

    let service = HighlightService::new(db, &images);
    let highlight = service.find(book.id, highlight.id).await?;
    service.set_image(&highlight, blank_image(40, 40)).await?;
    let highlight = service.find(book.id, highlight.id).await?;
    let name = highlight.image.clone().unwrap();

    service.delete(&highlight).await?;

    assert!(entity::prelude::Highlight::find().all(db).await?.is_empty());
    assert!(!dir.path().join(&name).exists());

    Ok(())
}

/// Tests that a highlight is only found through its own book.
///
/// Expected: Err(NotFound) when looked up under another book
#[tokio::test]
async fn is_scoped_to_book() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let images = ImageStore::new(dir.path());
    let (user, _, highlight) = factory::helpers::create_highlight_with_dependencies(db).await?;
    let other_book = factory::create_book(db, user.id).await?;

    let service = HighlightService::new(db, &images);
    service
        .create(
            other_book.id,
            HighlightParam {
                page: 1,
                content: "Another highlight entirely".to_string(),
            },
        )
        .await?;

    assert!(matches!(
        service.find(other_book.id, highlight.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
