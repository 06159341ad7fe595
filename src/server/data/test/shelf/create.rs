use super::*;

/// Tests that the first shelf of a user starts at position 1.
///
/// Expected: Ok with position 1
#[tokio::test]
async fn first_shelf_gets_position_one() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = ShelfRepository::new(db);
    let shelf = repo
        .create(
            user.id,
            ShelfParam {
                name: "Favorites".to_string(),
            },
        )
        .await?;

    assert_eq!(shelf.position, 1);
    assert_eq!(shelf.user_id, user.id);

    Ok(())
}

/// Tests that new shelves append after the last position.
///
/// Verifies positions stay dense per user and that another user's shelves do not
/// affect the numbering.
///
/// Expected: Ok with positions 1, 2, 3 for one user and 1 for the other
#[tokio::test]
async fn appends_after_last_position_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    named_shelves(db, user.id, &["A", "B"]).await?;
    named_shelves(db, other.id, &["X"]).await?;
    named_shelves(db, user.id, &["C"]).await?;

    assert_eq!(
        positions(db, user.id).await?,
        vec![
            ("A".to_string(), 1),
            ("B".to_string(), 2),
            ("C".to_string(), 3)
        ]
    );
    assert_eq!(positions(db, other.id).await?, vec![("X".to_string(), 1)]);

    Ok(())
}

/// Tests the last position lookup.
///
/// Expected: 0 without shelves, then the highest position
#[tokio::test]
async fn reports_last_position() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = ShelfRepository::new(db);
    assert_eq!(repo.last_position(user.id).await?, 0);

    named_shelves(db, user.id, &["A", "B"]).await?;
    assert_eq!(repo.last_position(user.id).await?, 2);

    Ok(())
}
