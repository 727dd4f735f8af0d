use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

/// Tests deleting an existing user.
///
/// Expected: Ok(true) and the user can no longer be found
#[tokio::test]
async fn deletes_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.delete(user.uid).await?);
    assert!(repo.find_by_uid(user.uid).await?.is_none());

    Ok(())
}

/// Tests deleting a user who owns a book, wrote a review, and posted a job.
///
/// Expected: Ok(true); the book stays without an owner, the review and job are gone
#[tokio::test]
async fn removes_reviews_and_jobs_and_orphans_books() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_book_tables()
        .with_table(entity::prelude::Location)
        .with_table(entity::prelude::Job)
        .with_table(entity::prelude::JobSkill)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, book) = factory::helpers::create_book_with_owner(db).await?;
    factory::review::create_review(db, user.uid, book.uid).await?;
    let location = factory::location::create_location(db).await?;
    factory::job::JobFactory::new(db, location.uid, user.uid)
        .skills(&["Rust"])
        .build()
        .await?;

    assert!(UserRepository::new(db).delete(user.uid).await?);

    let book = entity::prelude::Book::find_by_id(book.uid).one(db).await?.unwrap();
    assert_eq!(book.user_uid, None);
    assert_eq!(entity::prelude::Review::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Job::find().count(db).await?, 0);
    assert_eq!(entity::prelude::JobSkill::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a missing user.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.delete(uuid::Uuid::new_v4()).await?);

    Ok(())
}
