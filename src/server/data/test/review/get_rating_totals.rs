use super::*;

/// Tests the aggregate counts and sums ratings for the requested book only.
///
/// Expected: Ok((2, 8)) for the book, Ok((0, 0)) for a book without reviews
#[tokio::test]
async fn totals_book_ratings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, book) = factory::helpers::create_book_with_owner(db).await?;
    let other_book = factory::book::create_book(db, owner.uid).await?;

    for rating in [5, 3] {
        let reviewer = factory::user::create_user(db).await?;
        factory::review::ReviewFactory::new(db, reviewer.uid, book.uid)
            .rating(rating)
            .build()
            .await?;
    }
    factory::review::ReviewFactory::new(db, owner.uid, other_book.uid)
        .rating(1)
        .build()
        .await?;

    let repo = ReviewRepository::new(db);
    assert_eq!(repo.get_rating_totals(book.uid).await?, (2, 8));
    assert_eq!(repo.get_rating_totals(Uuid::new_v4()).await?, (0, 0));

    Ok(())
}
