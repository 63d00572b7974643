// Integration tests for authentication

use powerbi_client::prelude::*;

#[tokio::test]
#[ignore]
async fn test_login_with_environment_credentials() {
    setup_logger();
    let config = Config::new();
    assert!(
        config.credentials.has_credential(),
        "Set POWERBI_ACCESS_TOKEN, POWERBI_USERNAME/POWERBI_PASSWORD or POWERBI_CLIENT_SECRET"
    );

    let auth = Auth::new(Arc::new(config)).expect("Failed to build auth client");
    let session = auth.login().await.expect("Failed to login");

    assert!(!session.access_token.is_empty());
    assert!(!session.is_expired(None));
    info!("Logged in, token type {}", session.token_type);
}
