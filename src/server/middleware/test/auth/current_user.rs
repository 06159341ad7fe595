use super::*;

/// Tests resolving an anonymous request.
///
/// Expected: Ok(None) when the session holds no user id
#[tokio::test]
async fn returns_none_for_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_guard = AuthGuard::new(db, session);
    let user = auth_guard.current_user().await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests resolving a logged-in request.
///
/// Expected: Ok(Some(User)) matching the stored id
#[tokio::test]
async fn returns_user_from_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let current = auth_guard.current_user().await?;

    assert_eq!(current.map(|u| u.slug), Some(user.slug));

    Ok(())
}

/// Tests a session that points at a user who no longer exists.
///
/// Expected: Ok(None), the request is treated as anonymous
#[tokio::test]
async fn treats_missing_user_as_anonymous() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(4242).await?;

    let auth_guard = AuthGuard::new(db, session);

    assert!(auth_guard.current_user().await?.is_none());

    Ok(())
}
