use super::*;

/// Tests moving the first shelf down.
///
/// Expected: Ok with the first two shelves exchanged
#[tokio::test]
async fn swaps_with_next_shelf() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let service = ShelfService::new(db);
    let shelves = create_shelves(&service, user.id, &["A", "B", "C"]).await?;

    service.move_down(&shelves[0]).await?;

    assert_eq!(
        order(&service, user.id).await?,
        vec![
            ("B".to_string(), 1),
            ("A".to_string(), 2),
            ("C".to_string(), 3)
        ]
    );

    Ok(())
}

/// Tests moving the last shelf down.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_last_shelf() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let service = ShelfService::new(db);
    let shelves = create_shelves(&service, user.id, &["A", "B"]).await?;

    let result = service.move_down(&shelves[1]).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that another user's shelves do not count towards the last position.
///
/// Expected: Err(BadRequest) for a user's only shelf even when others have more
#[tokio::test]
async fn bound_is_per_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let service = ShelfService::new(db);
    let shelves = create_shelves(&service, owner.id, &["Only"]).await?;
    create_shelves(&service, other.id, &["X", "Y", "Z"]).await?;

    let result = service.move_down(&shelves[0]).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
