use super::*;

/// Tests creating a review and finding it by author and book.
///
/// Expected: Ok with the created review
#[tokio::test]
async fn creates_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, book) = factory::helpers::create_book_with_owner(db).await?;

    let repo = ReviewRepository::new(db);
    let review = repo
        .create(CreateReviewParam {
            user_uid: user.uid,
            book_uid: book.uid,
            rating: 5,
            review_text: "Loved it".to_string(),
        })
        .await?;

    assert_eq!(review.rating, 5);
    assert_eq!(
        repo.find_by_user_and_book(user.uid, book.uid).await?,
        Some(review.clone())
    );
    assert_eq!(repo.find_by_uid(review.uid).await?, Some(review));

    Ok(())
}

/// Tests the author/book lookup does not match other users.
///
/// Expected: Ok(None) for a user who has not reviewed the book
#[tokio::test]
async fn lookup_is_scoped_to_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, book) = factory::helpers::create_book_with_owner(db).await?;
    let other = factory::user::create_user(db).await?;
    factory::review::create_review(db, owner.uid, book.uid).await?;

    let repo = ReviewRepository::new(db);

    assert!(repo.find_by_user_and_book(other.uid, book.uid).await?.is_none());

    Ok(())
}
