use super::*;
use sea_orm::EntityTrait;

/// Tests deleting a book removes its reviews and tag links.
///
/// Expected: Ok(true) with no reviews or links left for the book
#[tokio::test]
async fn deletes_book_with_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, book) = factory::helpers::create_book_with_owner(db).await?;
    factory::review::create_review(db, user.uid, book.uid).await?;
    let tag = factory::tag::create_tag(db).await?;
    factory::tag::tag_book(db, book.uid, tag.uid).await?;

    let repo = BookRepository::new(db);

    assert!(repo.delete(book.uid).await?);
    assert!(repo.find_by_uid(book.uid).await?.is_none());
    assert!(entity::prelude::Review::find().all(db).await?.is_empty());
    assert!(entity::prelude::BookTag::find().all(db).await?.is_empty());
    assert!(entity::prelude::Tag::find_by_id(tag.uid).one(db).await?.is_some());

    Ok(())
}

/// Tests deleting a missing book.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);

    assert!(!repo.delete(Uuid::new_v4()).await?);

    Ok(())
}
