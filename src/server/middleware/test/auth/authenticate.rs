use super::*;

/// Tests a valid access token resolves the current user.
///
/// Expected: Ok((User, Claims)) for the token's user
#[tokio::test]
async fn resolves_current_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (tokens, blocklist) = (tokens(), blocklist());

    let user = domain_user(factory::user::create_user(db).await?);
    let headers = bearer(&tokens.create_access_token(&user.token_user())?);

    let (current, claims) = AuthGuard::new(db, &tokens, &blocklist, &headers)
        .authenticate()
        .await?;

    assert_eq!(current.uid, user.uid);
    assert_eq!(claims.user.email, user.email);

    Ok(())
}

/// Tests a request without credentials.
///
/// Expected: Err(AuthError::NotAuthenticated)
#[tokio::test]
async fn rejects_missing_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (tokens, blocklist) = (tokens(), blocklist());
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &tokens, &blocklist, &headers)
        .authenticate()
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotAuthenticated))
    ));

    Ok(())
}

/// Tests expired tokens and tokens signed with another secret.
///
/// Expected: Err(AuthError::InvalidToken) for both
#[tokio::test]
async fn rejects_expired_or_foreign_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (tokens, blocklist) = (tokens(), blocklist());

    let user = domain_user(factory::user::create_user(db).await?);

    let expired = TokenService::new(
        SECRET,
        Algorithm::HS256,
        Duration::minutes(-5),
        Duration::days(7),
    )
    .create_access_token(&user.token_user())?;
    let foreign = TokenService::new(
        "some-other-secret",
        Algorithm::HS256,
        Duration::minutes(60),
        Duration::days(7),
    )
    .create_access_token(&user.token_user())?;

    for token in [expired, foreign] {
        let headers = bearer(&token);
        let result = AuthGuard::new(db, &tokens, &blocklist, &headers)
            .authenticate()
            .await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidToken))
        ));
    }

    Ok(())
}

/// Tests a token whose id was added to the blocklist.
///
/// Expected: Err(AuthError::RevokedToken)
#[tokio::test]
async fn rejects_revoked_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (tokens, blocklist) = (tokens(), blocklist());

    let user = domain_user(factory::user::create_user(db).await?);
    let token = tokens.create_access_token(&user.token_user())?;
    blocklist.add(&tokens.decode(&token)?.jti).await?;

    let headers = bearer(&token);
    let result = AuthGuard::new(db, &tokens, &blocklist, &headers)
        .authenticate()
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::RevokedToken(_)))
    ));

    Ok(())
}

/// Tests a refresh token presented to the access gate.
///
/// Expected: Err(AuthError::AccessTokenRequired)
#[tokio::test]
async fn rejects_refresh_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (tokens, blocklist) = (tokens(), blocklist());

    let user = domain_user(factory::user::create_user(db).await?);
    let headers = bearer(&tokens.create_refresh_token(&user.token_user())?);

    let result = AuthGuard::new(db, &tokens, &blocklist, &headers)
        .authenticate()
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessTokenRequired))
    ));

    Ok(())
}

/// Tests a valid token for a user that was deleted.
///
/// Expected: Err(AuthError::UserNotInDatabase) with the token's user uid
#[tokio::test]
async fn rejects_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (tokens, blocklist) = (tokens(), blocklist());

    let user = domain_user(factory::user::create_user(db).await?);
    let headers = bearer(&tokens.create_access_token(&user.token_user())?);
    crate::server::data::user::UserRepository::new(db)
        .delete(user.uid)
        .await?;

    let result = AuthGuard::new(db, &tokens, &blocklist, &headers)
        .authenticate()
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(uid))) => assert_eq!(uid, user.uid),
        other => panic!("Expected UserNotInDatabase, got: {:?}", other.map(|(u, _)| u.uid)),
    }

    Ok(())
}
