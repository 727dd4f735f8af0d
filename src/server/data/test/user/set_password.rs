use super::*;

/// Tests replacing a user's password hash.
///
/// Expected: Ok(true) and the stored hash changed
#[tokio::test]
async fn replaces_password_hash() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .password_hash("old-hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let replaced = repo.set_password(user.uid, "new-hash".to_string()).await?;
    let stored = repo.find_by_uid(user.uid).await?.unwrap();

    assert!(replaced);
    assert_eq!(stored.password_hash, "new-hash");

    Ok(())
}

/// Tests replacing the password of a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn missing_user_is_reported() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let replaced = UserRepository::new(db)
        .set_password(uuid::Uuid::new_v4(), "new-hash".to_string())
        .await?;

    assert!(!replaced);

    Ok(())
}
