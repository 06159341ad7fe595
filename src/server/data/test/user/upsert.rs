use super::*;

fn google_user(email: &str, name: &str) -> UpsertUserParam {
    UpsertUserParam {
        email: email.to_string(),
        name: name.to_string(),
        image: Some("https://example.com/avatar.png".to_string()),
    }
}

/// Tests creating a user on first login.
///
/// Verifies that a new email inserts a user with a generated slug.
///
/// Expected: Ok with one user row and a non-empty slug
#[tokio::test]
async fn creates_user_with_generated_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.upsert(google_user("ada@example.com", "Ada")).await?;

    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.name, "Ada");
    assert!(!user.slug.is_empty());
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}

/// Tests logging in again with the same email.
///
/// Verifies that name and image are refreshed while id and slug are kept.
///
/// Expected: Ok with the same id and slug, new name
#[tokio::test]
async fn refreshes_existing_user_and_keeps_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let first = repo.upsert(google_user("ada@example.com", "Ada")).await?;
    let second = repo
        .upsert(UpsertUserParam {
            image: None,
            ..google_user("ada@example.com", "Ada Lovelace")
        })
        .await?;

    assert_eq!(second.id, first.id);
    assert_eq!(second.slug, first.slug);
    assert_eq!(second.name, "Ada Lovelace");
    assert_eq!(second.image, None);
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}
