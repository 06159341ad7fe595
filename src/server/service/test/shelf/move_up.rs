use super::*;

/// Tests moving the second shelf up.
///
/// Expected: Ok with the first two shelves exchanged and positions still 1..=3
#[tokio::test]
async fn swaps_with_previous_shelf() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let service = ShelfService::new(db);
    let shelves = create_shelves(&service, user.id, &["A", "B", "C"]).await?;

    service.move_up(&shelves[1]).await?;

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

/// Tests moving the first shelf up.
///
/// Expected: Err(BadRequest) and no positions changed
#[tokio::test]
async fn rejects_first_shelf() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let service = ShelfService::new(db);
    let shelves = create_shelves(&service, user.id, &["A", "B"]).await?;

    let result = service.move_up(&shelves[0]).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(
        order(&service, user.id).await?,
        vec![("A".to_string(), 1), ("B".to_string(), 2)]
    );

    Ok(())
}

/// Tests moving up a shelf that already reached the top after it was loaded.
///
/// Expected: Err(BadRequest) and no positions changed
#[tokio::test]
async fn rejects_stale_shelf_now_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let service = ShelfService::new(db);
    let shelves = create_shelves(&service, user.id, &["A", "B"]).await?;
    let stale_b = shelves[1].clone();

    service.move_up(&shelves[1]).await?;
    let result = service.move_up(&stale_b).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(
        order(&service, user.id).await?,
        vec![("B".to_string(), 1), ("A".to_string(), 2)]
    );

    Ok(())
}
