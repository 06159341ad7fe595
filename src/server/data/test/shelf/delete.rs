use super::*;

/// Tests deleting a middle shelf.
///
/// Verifies that only shelves after the deleted one move up, keeping positions dense.
///
/// Expected: Ok with positions 1..=3 for the remaining shelves
#[tokio::test]
async fn compacts_later_positions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let shelves = named_shelves(db, user.id, &["A", "B", "C", "D"]).await?;

    let repo = ShelfRepository::new(db);
    repo.delete(&shelves[1]).await?;

    assert_eq!(
        positions(db, user.id).await?,
        vec![
            ("A".to_string(), 1),
            ("C".to_string(), 2),
            ("D".to_string(), 3)
        ]
    );

    Ok(())
}

/// Tests deleting a shelf that holds books.
///
/// Verifies the books survive without a shelf while books on other shelves keep theirs.
///
/// Expected: Ok with the shelved book unshelved
#[tokio::test]
async fn unshelves_books() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let shelves = named_shelves(db, user.id, &["A", "B"]).await?;

    let on_deleted = factory::book::BookFactory::new(db, user.id)
        .shelf_id(Some(shelves[0].id))
        .build()
        .await?;
    let on_kept = factory::book::BookFactory::new(db, user.id)
        .shelf_id(Some(shelves[1].id))
        .build()
        .await?;

    let repo = ShelfRepository::new(db);
    repo.delete(&shelves[0]).await?;

    let on_deleted = entity::prelude::Book::find_by_id(on_deleted.id)
        .one(db)
        .await?
        .unwrap();
    let on_kept = entity::prelude::Book::find_by_id(on_kept.id)
        .one(db)
        .await?
        .unwrap();

    assert_eq!(on_deleted.shelf_id, None);
    assert_eq!(on_kept.shelf_id, Some(shelves[1].id));
    assert_eq!(positions(db, user.id).await?, vec![("B".to_string(), 1)]);

    Ok(())
}

/// Tests deleting the last shelf.
///
/// Expected: Ok with earlier positions unchanged
#[tokio::test]
async fn deleting_last_shelf_moves_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let shelves = named_shelves(db, user.id, &["A", "B", "C"]).await?;

    let repo = ShelfRepository::new(db);
    repo.delete(&shelves[2]).await?;

    assert_eq!(
        positions(db, user.id).await?,
        vec![("A".to_string(), 1), ("B".to_string(), 2)]
    );

    Ok(())
}

/// Tests deleting through a shelf loaded before it was moved.
///
/// Verifies compaction uses the position stored at delete time, not the stale copy.
///
/// Expected: Ok with remaining positions dense at 1..=2
#[tokio::test]
async fn compacts_from_current_position_of_stale_shelf() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let shelves = named_shelves(db, user.id, &["A", "B", "C"]).await?;
    let stale_c = shelves[2].clone();

    let repo = ShelfRepository::new(db);
    repo.swap(&shelves[2], MoveDirection::Up).await?;
    repo.delete(&stale_c).await?;

    assert_eq!(
        positions(db, user.id).await?,
        vec![("A".to_string(), 1), ("B".to_string(), 2)]
    );

    Ok(())
}

/// Tests deleting a shelf twice.
///
/// Expected: Ok with the second delete leaving positions unchanged
#[tokio::test]
async fn deleting_missing_shelf_changes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let shelves = named_shelves(db, user.id, &["A", "B", "C"]).await?;

    let repo = ShelfRepository::new(db);
    repo.delete(&shelves[0]).await?;
    repo.delete(&shelves[0]).await?;

    assert_eq!(
        positions(db, user.id).await?,
        vec![("B".to_string(), 1), ("C".to_string(), 2)]
    );

    Ok(())
}
