use super::*;

/// Tests renaming a shelf.
///
/// Expected: Ok with the new name and unchanged position
#[tokio::test]
async fn renames_without_moving() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let shelves = named_shelves(db, user.id, &["A", "B"]).await?;

    let repo = ShelfRepository::new(db);
    let renamed = repo
        .rename(
            shelves[1].id,
            ShelfParam {
                name: "To read".to_string(),
            },
        )
        .await?;

    assert_eq!(renamed.name, "To read");
    assert_eq!(renamed.position, 2);

    Ok(())
}
