use super::*;

/// Tests saving profile edits.
///
/// Verifies that set fields are stored and `None` clears previous values.
///
/// Expected: Ok with the new description and no twitter handle
#[tokio::test]
async fn updates_profile_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .description(Some("old".to_string()))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.id,
            UpdateUserParam {
                description: Some("Collector of first editions".to_string()),
                amazon_associates_id: None,
                facebook: None,
                twitter: None,
                linkedin: None,
                instagram: Some("shelfie".to_string()),
                phone: None,
                whatsapp: None,
                telegram: None,
            },
        )
        .await?;

    assert_eq!(
        updated.description.as_deref(),
        Some("Collector of first editions")
    );
    assert_eq!(updated.instagram.as_deref(), Some("shelfie"));
    assert_eq!(updated.slug, user.slug);

    Ok(())
}
