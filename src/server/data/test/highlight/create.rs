use super::*;

/// Tests adding a highlight and editing it afterwards.
///
/// Expected: Ok with the stored page and content after each write
#[tokio::test]
async fn creates_and_updates_highlight() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, book) = factory::helpers::create_book_with_owner(db).await?;

    let repo = HighlightRepository::new(db);
    let created = repo
        .create(
            book.id,
            HighlightParam {
                page: 3,
                content: "A quotation worth keeping".to_string(),
            },
        )
        .await?;
    let updated = repo
        .update(
            created.id,
            HighlightParam {
                page: 4,
                content: "A corrected quotation".to_string(),
            },
        )
        .await?;

    assert_eq!(created.book_id, book.id);
    assert_eq!(updated.page, 4);
    assert_eq!(updated.content, "A corrected quotation");

    Ok(())
}
