use super::*;

/// Tests only books owned by the given user are returned.
///
/// Expected: Ok with the owner's books and none of another user's
#[tokio::test]
async fn returns_only_owned_books() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    factory::book::create_book(db, owner.uid).await?;
    factory::book::create_book(db, owner.uid).await?;
    factory::book::create_book(db, other.uid).await?;

    let repo = BookRepository::new(db);
    let books = repo.get_by_user(owner.uid).await?;

    assert_eq!(books.len(), 2);
    assert!(books.iter().all(|b| b.user_uid == Some(owner.uid)));

    Ok(())
}

/// Tests a user without books.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_user_without_books() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = BookRepository::new(db);

    assert!(repo.get_by_user(user.uid).await?.is_empty());

    Ok(())
}
