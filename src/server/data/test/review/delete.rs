use super::*;

/// Tests deleting a review.
///
/// Expected: Ok(true) first, Ok(false) when repeated
#[tokio::test]
async fn deletes_review_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, book) = factory::helpers::create_book_with_owner(db).await?;
    let review = factory::review::create_review(db, user.uid, book.uid).await?;

    let repo = ReviewRepository::new(db);

    assert!(repo.delete(review.uid).await?);
    assert!(!repo.delete(review.uid).await?);
    assert!(repo.find_by_uid(review.uid).await?.is_none());

    Ok(())
}
