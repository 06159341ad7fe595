use super::*;

/// Tests resolving a known slug.
///
/// Expected: Ok(User)
#[tokio::test]
async fn finds_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::user::UserFactory::new(db)
        .slug("reader")
        .build()
        .await?;

    let found = UserService::new(db).find_by_slug("reader").await?;

    assert_eq!(found.id, user.id);

    Ok(())
}

/// Tests resolving an unknown slug.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn unknown_slug_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db).find_by_slug("missing").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
