use super::*;

/// Tests limit and offset windows over all reviews.
///
/// Expected: Ok with at most `limit` reviews starting at `offset`
#[tokio::test]
async fn applies_limit_and_offset() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, book) = factory::helpers::create_book_with_owner(db).await?;
    for _ in 0..5 {
        let reviewer = factory::user::create_user(db).await?;
        factory::review::create_review(db, reviewer.uid, book.uid).await?;
    }

    let repo = ReviewRepository::new(db);

    assert_eq!(repo.get_page(ReviewPage::new(2, 0)).await?.len(), 2);
    assert_eq!(repo.get_page(ReviewPage::new(2, 4)).await?.len(), 1);
    assert_eq!(repo.get_page(ReviewPage::default()).await?.len(), 5);

    Ok(())
}

/// Tests book and user scoped listings only return matching reviews.
///
/// Expected: Ok with reviews for the requested book or user only
#[tokio::test]
async fn scopes_by_book_and_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (reader, first) = factory::helpers::create_book_with_owner(db).await?;
    let second = factory::book::create_book(db, reader.uid).await?;
    let other = factory::user::create_user(db).await?;

    factory::review::create_review(db, reader.uid, first.uid).await?;
    factory::review::create_review(db, reader.uid, second.uid).await?;
    factory::review::create_review(db, other.uid, first.uid).await?;

    let repo = ReviewRepository::new(db);

    let by_book = repo.get_page_by_book(first.uid, ReviewPage::default()).await?;
    assert_eq!(by_book.len(), 2);
    assert!(by_book.iter().all(|r| r.book_uid == first.uid));

    let by_user = repo.get_page_by_user(reader.uid, ReviewPage::default()).await?;
    assert_eq!(by_user.len(), 2);
    assert!(by_user.iter().all(|r| r.user_uid == reader.uid));

    assert_eq!(repo.get_by_book(second.uid).await?.len(), 1);
    assert_eq!(repo.get_by_user(other.uid).await?.len(), 1);

    Ok(())
}
