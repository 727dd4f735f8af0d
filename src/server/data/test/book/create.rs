use super::*;

/// Tests creating a book owned by a user.
///
/// Expected: Ok with the created book, readable by uid
#[tokio::test]
async fn creates_book_for_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = BookRepository::new(db);
    let book = repo.create(create_param(user.uid, "Dune")).await?;

    assert_eq!(book.user_uid, Some(user.uid));
    assert_eq!(book.title, "Dune");
    assert_eq!(repo.find_by_uid(book.uid).await?, Some(book));

    Ok(())
}

/// Tests all books are returned newest first.
///
/// Expected: Ok with the most recently created book first
#[tokio::test]
async fn lists_books_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = BookRepository::new(db);
    let first = repo.create(create_param(user.uid, "First")).await?;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let second = repo.create(create_param(user.uid, "Second")).await?;

    let books = repo.get_all().await?;

    assert_eq!(
        books.iter().map(|b| b.uid).collect::<Vec<_>>(),
        vec![second.uid, first.uid]
    );

    Ok(())
}
