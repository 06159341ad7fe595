use super::*;

/// Tests looking a user up by slug.
///
/// Expected: Ok(Some) for a known slug, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .slug("reader")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_slug("reader").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));
    assert!(repo.find_by_slug("nobody").await?.is_none());

    Ok(())
}
