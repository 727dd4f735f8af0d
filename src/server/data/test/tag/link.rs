use super::*;

/// Tests linking a tag to a book once.
///
/// Expected: Ok(true) on first link, Ok(false) when already linked
#[tokio::test]
async fn links_tag_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, book) = factory::helpers::create_book_with_owner(db).await?;
    let tag = factory::tag::create_tag(db).await?;

    let repo = TagRepository::new(db);

    assert!(repo.link(book.uid, tag.uid).await?);
    assert!(!repo.link(book.uid, tag.uid).await?);

    Ok(())
}

/// Tests the tags of a book are returned by name.
///
/// Expected: Ok with only the linked tags, sorted by name
#[tokio::test]
async fn returns_book_tags_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, book) = factory::helpers::create_book_with_owner(db).await?;
    let zeta = factory::tag::create_tag_with_name(db, "zeta").await?;
    let alpha = factory::tag::create_tag_with_name(db, "alpha").await?;
    factory::tag::create_tag_with_name(db, "unused").await?;
    factory::tag::tag_book(db, book.uid, zeta.uid).await?;
    factory::tag::tag_book(db, book.uid, alpha.uid).await?;

    let repo = TagRepository::new(db);
    let tags = repo.get_by_book(book.uid).await?;

    let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "zeta"]);

    Ok(())
}
