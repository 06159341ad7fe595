use super::*;

/// Tests grouping a library for the profile page.
///
/// Verifies shelves come in position order with their own books and that books without
/// a shelf are listed separately.
///
/// Expected: Ok with two shelves and one unshelved book
#[tokio::test]
async fn groups_books_by_shelf() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let first = factory::shelf::ShelfFactory::new(db, user.id)
        .name("First")
        .build()
        .await?;
    let second = factory::shelf::ShelfFactory::new(db, user.id)
        .name("Second")
        .build()
        .await?;

    let on_second = factory::book::BookFactory::new(db, user.id)
        .shelf_id(Some(second.id))
        .build()
        .await?;
    let loose = factory::create_book(db, user.id).await?;

    let user = User::from_entity(user);
    let profile = UserService::new(db).profile(&user).await?;

    let names: Vec<_> = profile.shelves.iter().map(|s| s.shelf.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second"]);
    assert_eq!(profile.shelves[0].shelf.id, first.id);
    assert!(profile.shelves[0].books.is_empty());
    assert_eq!(profile.shelves[1].books.len(), 1);
    assert_eq!(profile.shelves[1].books[0].id, on_second.id);
    assert_eq!(profile.unshelved.len(), 1);
    assert_eq!(profile.unshelved[0].id, loose.id);

    Ok(())
}
