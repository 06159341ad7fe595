use super::*;

/// Tests that the form token is generated once per session.
///
/// Expected: Ok with the same 32 character token on repeated calls
#[tokio::test]
async fn reuses_generated_token() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let tokens = FormTokenSession::new(session);
    let first = tokens.token().await?;
    let second = tokens.token().await?;

    assert_eq!(first.len(), 32);
    assert!(first.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(first, second);

    Ok(())
}

/// Tests verifying submitted form tokens.
///
/// Expected: Ok for the session token, Err(FormCsrfMismatch) for anything else
#[tokio::test]
async fn verifies_submitted_token() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let tokens = FormTokenSession::new(session);
    let token = tokens.token().await?;

    tokens.verify(&token).await?;

    for forged in ["", "wrong"] {
        assert!(matches!(
            tokens.verify(forged).await,
            Err(AppError::AuthErr(AuthError::FormCsrfMismatch))
        ));
    }

    Ok(())
}

/// Tests verifying before any form was rendered.
///
/// Expected: Err(FormCsrfMismatch) even for an empty submission
#[tokio::test]
async fn rejects_when_no_token_issued() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let result = FormTokenSession::new(session).verify("").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::FormCsrfMismatch))
    ));

    Ok(())
}
