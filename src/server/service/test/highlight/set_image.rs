use super::*;

/// Tests attaching an oversized image to a highlight.
///
/// Verifies the stored file is shrunk to the highlight bounds.
///
/// Expected: Ok with a 1000 px wide image referenced by the highlight
#[tokio::test]
async fn stores_shrunk_image() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let images = ImageStore::new(dir.path());
    let (_, book, highlight) = factory::helpers::create_highlight_with_dependencies(db).await?;

    let service = HighlightService::new(db, &images);
    let highlight = service.find(book.id, highlight.id).await?;
    service.set_image(&highlight, blank_image(2000, 1500)).await?;

    let stored = service.find(book.id, highlight.id).await?;
    let name = stored.image.clone().unwrap();
    let decoded = image::load_from_memory(&std::fs::read(dir.path().join(&name)).unwrap()).unwrap();

    assert_eq!((decoded.width(), decoded.height()), (1000, 750));
    assert_eq!(stored.image_url(), Some(format!("/highlights/image/{}", name)));

    Ok(())
}

/// Tests attaching an image to a highlight deleted after it was loaded.
///
/// Verifies the uploaded file is removed again when the record cannot be updated.
///
/// Expected: Err(NotFound) with no image file left on disk
#[tokio::test]
async fn discards_upload_when_highlight_is_gone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let images = ImageStore::new(dir.path());
    let (_, book, highlight) = factory::helpers::create_highlight_with_dependencies(db).await?;

    let service = HighlightService::new(db, &images);
    let stale = service.find(book.id, highlight.id).await?;
    entity::prelude::Highlight::delete_by_id(highlight.id)
        .exec(db)
        .await?;

    let result = service.set_image(&stale, blank_image(400, 300)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);

    Ok(())
}
