use super::*;

/// Tests a partial review update.
///
/// Expected: Ok(Some) with the new rating and unchanged text
#[tokio::test]
async fn updates_rating_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, book) = factory::helpers::create_book_with_owner(db).await?;
    let review = factory::review::create_review(db, user.uid, book.uid).await?;

    let repo = ReviewRepository::new(db);
    let updated = repo
        .update(
            review.uid,
            UpdateReviewParam {
                rating: Some(2),
                review_text: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.rating, 2);
    assert_eq!(updated.review_text, review.review_text);

    Ok(())
}

/// Tests updating a missing review.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReviewRepository::new(db);

    assert!(repo
        .update(Uuid::new_v4(), UpdateReviewParam::default())
        .await?
        .is_none());

    Ok(())
}
