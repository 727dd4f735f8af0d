use super::*;

/// Tests finding a user by email.
///
/// Expected: Ok(Some) for a known email and Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("reader@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_email("reader@example.com").await?;
    assert_eq!(found.map(|u| u.uid), Some(user.uid));

    assert!(repo.find_by_email("nobody@example.com").await?.is_none());

    Ok(())
}

/// Tests the email existence check.
///
/// Expected: true only for emails already registered
#[tokio::test]
async fn reports_email_existence() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("reader@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.email_exists("reader@example.com").await?);
    assert!(!repo.email_exists("writer@example.com").await?);

    Ok(())
}
