use super::*;

/// Tests validating the OAuth state against the stored token.
///
/// Verifies the token is single use: a second validation with the same state fails.
///
/// Expected: Ok on first validation, Err(CsrfValidationFailed) on reuse
#[tokio::test]
async fn validates_state_once() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let csrf = CsrfSession::new(session);
    csrf.set_token("state-123".to_string()).await?;

    csrf.validate("state-123").await?;
    let reused = csrf.validate("state-123").await;

    assert!(matches!(
        reused,
        Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
    ));

    Ok(())
}

/// Tests a callback whose state differs from the stored token.
///
/// Expected: Err(CsrfValidationFailed)
#[tokio::test]
async fn rejects_mismatched_state() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let csrf = CsrfSession::new(session);
    csrf.set_token("expected".to_string()).await?;

    let result = csrf.validate("forged").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
    ));

    Ok(())
}

/// Tests that logging out clears the session user.
///
/// Expected: Ok(None) after clear
#[tokio::test]
async fn clear_logs_user_out() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let auth = AuthSession::new(session);
    auth.set_user_id(7).await?;
    assert_eq!(auth.get_user_id().await?, Some(7));

    auth.clear().await;

    assert_eq!(auth.get_user_id().await?, None);

    Ok(())
}
