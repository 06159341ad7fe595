use super::*;

/// Tests moving a shelf up one position.
///
/// Expected: Ok with the shelf and its upper neighbour exchanged
#[tokio::test]
async fn moves_shelf_up() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let shelves = named_shelves(db, user.id, &["A", "B", "C"]).await?;

    let repo = ShelfRepository::new(db);
    repo.swap(&shelves[2], MoveDirection::Up).await?;

    assert_eq!(
        positions(db, user.id).await?,
        vec![
            ("A".to_string(), 1),
            ("C".to_string(), 2),
            ("B".to_string(), 3)
        ]
    );

    Ok(())
}

/// Tests moving a shelf down one position.
///
/// Expected: Ok with the shelf and its lower neighbour exchanged
#[tokio::test]
async fn moves_shelf_down() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let shelves = named_shelves(db, user.id, &["A", "B", "C"]).await?;

    let repo = ShelfRepository::new(db);
    repo.swap(&shelves[0], MoveDirection::Down).await?;

    assert_eq!(
        positions(db, user.id).await?,
        vec![
            ("B".to_string(), 1),
            ("A".to_string(), 2),
            ("C".to_string(), 3)
        ]
    );

    Ok(())
}

/// Tests that the first shelf cannot move up.
///
/// Expected: Err(DbErr::RecordNotFound) and no position changes
#[tokio::test]
async fn rejects_moving_first_shelf_up() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let shelves = named_shelves(db, user.id, &["A", "B"]).await?;

    let repo = ShelfRepository::new(db);
    let result = repo.swap(&shelves[0], MoveDirection::Up).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
    assert_eq!(
        positions(db, user.id).await?,
        vec![("A".to_string(), 1), ("B".to_string(), 2)]
    );

    Ok(())
}

/// Tests that the last shelf cannot move down.
///
/// Expected: Err(DbErr::RecordNotFound) and no position changes
#[tokio::test]
async fn rejects_moving_last_shelf_down() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let shelves = named_shelves(db, user.id, &["A", "B"]).await?;

    let repo = ShelfRepository::new(db);
    let result = repo.swap(&shelves[1], MoveDirection::Down).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
    assert_eq!(
        positions(db, user.id).await?,
        vec![("A".to_string(), 1), ("B".to_string(), 2)]
    );

    Ok(())
}

/// Tests that swapping never touches another user's shelves.
///
/// Expected: Ok with the other user's positions unchanged
#[tokio::test]
async fn leaves_other_users_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let shelves = named_shelves(db, user.id, &["A", "B"]).await?;
    named_shelves(db, other.id, &["X", "Y"]).await?;

    let repo = ShelfRepository::new(db);
    repo.swap(&shelves[1], MoveDirection::Up).await?;

    assert_eq!(
        positions(db, other.id).await?,
        vec![("X".to_string(), 1), ("Y".to_string(), 2)]
    );

    Ok(())
}

/// Tests swapping through a shelf loaded before another move.
///
/// Verifies the neighbour is chosen from the current position, not the stale copy.
///
/// Expected: Ok with the shelf moved one step from where it is now
#[tokio::test]
async fn swaps_from_current_position_of_stale_shelf() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let shelves = named_shelves(db, user.id, &["A", "B", "C"]).await?;
    let stale_c = shelves[2].clone();

    let repo = ShelfRepository::new(db);
    repo.swap(&shelves[2], MoveDirection::Up).await?;
    repo.swap(&stale_c, MoveDirection::Up).await?;

    assert_eq!(
        positions(db, user.id).await?,
        vec![
            ("C".to_string(), 1),
            ("A".to_string(), 2),
            ("B".to_string(), 3)
        ]
    );

    Ok(())
}
