use super::*;

/// Tests renaming a tag.
///
/// Expected: Ok(Some) with the new name
#[tokio::test]
async fn renames_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tag = factory::tag::create_tag(db).await?;

    let repo = TagRepository::new(db);
    let renamed = repo.rename(tag.uid, "classics".to_string()).await?.unwrap();

    assert_eq!(renamed.uid, tag.uid);
    assert_eq!(renamed.name, "classics");

    Ok(())
}

/// Tests renaming a missing tag.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TagRepository::new(db);

    assert!(repo
        .rename(Uuid::new_v4(), "classics".to_string())
        .await?
        .is_none());

    Ok(())
}
