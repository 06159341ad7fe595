use super::*;

/// Tests editing a book.
///
/// Expected: Ok with new fields and the original ISBN
#[tokio::test]
async fn updates_editable_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, book) = factory::helpers::create_book_with_owner(db).await?;

    let repo = BookRepository::new(db);
    let updated = repo
        .update(
            book.id,
            UpdateBookParam {
                title: "New title".to_string(),
                subtitle: "Second edition".to_string(),
                author: "Someone".to_string(),
                description: "Long description".to_string(),
                publisher: "Publisher".to_string(),
                page_count: 12,
            },
        )
        .await?;

    assert_eq!(updated.title, "New title");
    assert_eq!(updated.page_count, 12);
    assert_eq!(updated.isbn, book.isbn);

    Ok(())
}

/// Tests placing a book on a shelf and taking it off again.
///
/// Expected: Ok with shelf_id set, then cleared
#[tokio::test]
async fn sets_and_clears_shelf() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, book) = factory::helpers::create_book_with_owner(db).await?;
    let shelf = factory::create_shelf(db, user.id).await?;

    let repo = BookRepository::new(db);

    repo.set_shelf(book.id, Some(shelf.id)).await?;
    let shelved = repo.find_by_isbn(user.id, &book.isbn).await?.unwrap();
    assert_eq!(shelved.shelf_id, Some(shelf.id));

    repo.set_shelf(book.id, None).await?;
    let unshelved = repo.find_by_isbn(user.id, &book.isbn).await?.unwrap();
    assert_eq!(unshelved.shelf_id, None);

    Ok(())
}
