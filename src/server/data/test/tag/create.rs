use super::*;

/// Tests creating a tag and finding it by name.
///
/// Expected: Ok with the created tag
#[tokio::test]
async fn creates_and_finds_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TagRepository::new(db);
    let tag = repo.create("sci-fi".to_string()).await?;

    assert_eq!(repo.find_by_name("sci-fi").await?, Some(tag.clone()));
    assert_eq!(repo.find_by_uid(tag.uid).await?, Some(tag));
    assert!(repo.find_by_name("fantasy").await?.is_none());

    Ok(())
}

/// Tests tag names are unique at the database level.
///
/// Expected: Err on duplicate name
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TagRepository::new(db);
    repo.create("sci-fi".to_string()).await?;

    assert!(repo.create("sci-fi".to_string()).await.is_err());

    Ok(())
}

/// Tests listing returns every tag.
///
/// Expected: Ok with all created tags
#[tokio::test]
async fn lists_all_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::tag::create_tag(db).await?;
    factory::tag::create_tag(db).await?;

    let repo = TagRepository::new(db);

    assert_eq!(repo.get_all().await?.len(), 2);

    Ok(())
}
