use super::*;

/// Tests listing a book's highlights.
///
/// Expected: Ok with highlights ordered by page and scoped to the book
#[tokio::test]
async fn lists_highlights_by_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, book) = factory::helpers::create_book_with_owner(db).await?;
    let other_book = factory::create_book(db, user.id).await?;

    factory::highlight::HighlightFactory::new(db, book.id)
        .page(20)
        .build()
        .await?;
    factory::highlight::HighlightFactory::new(db, book.id)
        .page(5)
        .build()
        .await?;
    factory::create_highlight(db, other_book.id).await?;

    let repo = HighlightRepository::new(db);
    let highlights = repo.get_by_book(book.id).await?;

    let pages: Vec<i32> = highlights.iter().map(|h| h.page).collect();
    assert_eq!(pages, vec![5, 20]);
    assert!(repo.find_for_book(other_book.id, highlights[0].id).await?.is_none());

    Ok(())
}
