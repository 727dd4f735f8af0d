use super::*;

/// Tests the refresh gate accepts refresh tokens only.
///
/// Expected: Ok(Claims) for a refresh token, Err(AuthError::RefreshTokenRequired)
/// for an access token
#[tokio::test]
async fn accepts_only_refresh_tokens() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (tokens, blocklist) = (tokens(), blocklist());

    let user = domain_user(factory::user::create_user(db).await?);

    let headers = bearer(&tokens.create_refresh_token(&user.token_user())?);
    let claims = AuthGuard::new(db, &tokens, &blocklist, &headers)
        .refresh()
        .await?;
    assert!(claims.refresh);
    assert_eq!(claims.user.user_uid, user.uid);

    let headers = bearer(&tokens.create_access_token(&user.token_user())?);
    let result = AuthGuard::new(db, &tokens, &blocklist, &headers)
        .refresh()
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::RefreshTokenRequired))
    ));

    Ok(())
}

/// Tests a revoked refresh token.
///
/// Expected: Err(AuthError::RevokedToken)
#[tokio::test]
async fn rejects_revoked_refresh_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (tokens, blocklist) = (tokens(), blocklist());

    let user = domain_user(factory::user::create_user(db).await?);
    let token = tokens.create_refresh_token(&user.token_user())?;
    blocklist.add(&tokens.decode(&token)?.jti).await?;

    let headers = bearer(&token);
    let result = AuthGuard::new(db, &tokens, &blocklist, &headers)
        .refresh()
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::RevokedToken(_)))
    ));

    Ok(())
}
