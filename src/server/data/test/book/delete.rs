use super::*;

/// Tests deleting a book with highlights.
///
/// Verifies that the book's highlights are removed with it while other books keep theirs.
///
/// Expected: Ok with one remaining book and one remaining highlight
#[tokio::test]
async fn deletes_book_and_its_highlights() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, book, _) = factory::helpers::create_highlight_with_dependencies(db).await?;
    factory::create_highlight(db, book.id).await?;
    let kept = factory::create_book(db, user.id).await?;
    factory::create_highlight(db, kept.id).await?;

    let repo = BookRepository::new(db);
    repo.delete(book.id).await?;

    assert_eq!(entity::prelude::Book::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Highlight::find().count(db).await?, 1);

    Ok(())
}
