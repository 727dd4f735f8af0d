use super::*;

/// Tests deleting a tag removes its book links first.
///
/// Expected: Ok(true) and the book no longer has the tag
#[tokio::test]
async fn deletes_tag_and_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, book) = factory::helpers::create_book_with_owner(db).await?;
    let tag = factory::tag::create_tag(db).await?;
    factory::tag::tag_book(db, book.uid, tag.uid).await?;

    let repo = TagRepository::new(db);

    assert!(repo.delete(tag.uid).await?);
    assert!(repo.find_by_uid(tag.uid).await?.is_none());
    assert!(repo.get_by_book(book.uid).await?.is_empty());

    Ok(())
}

/// Tests deleting a missing tag.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TagRepository::new(db);

    assert!(!repo.delete(Uuid::new_v4()).await?);

    Ok(())
}
