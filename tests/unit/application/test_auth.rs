use mockito::{Matcher, Server};
use powerbi_client::prelude::*;

fn config_for(server_url: &str, credentials: Credentials) -> Arc<Config> {
    Arc::new(Config {
        credentials,
        rest_api: RestApiConfig::default(),
        auth: AuthConfig {
            authority_url: server_url.to_string(),
            scope: DEFAULT_SCOPE.to_string(),
        },
    })
}

fn base_credentials() -> Credentials {
    Credentials {
        tenant_id: "contoso".to_string(),
        client_id: "app-id".to_string(),
        ..Credentials::default()
    }
}

const TOKEN_BODY: &str =
    r#"{"token_type":"Bearer","expires_in":3599,"ext_expires_in":3599,"access_token":"eyJ0eXAi"}"#;

#[tokio::test]
async fn test_password_grant() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/contoso/oauth2/v2.0/token")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "password".into()),
            Matcher::UrlEncoded("client_id".into(), "app-id".into()),
            Matcher::UrlEncoded("username".into(), "user@contoso.com".into()),
            Matcher::UrlEncoded("password".into(), "hunter2".into()),
            Matcher::UrlEncoded("scope".into(), DEFAULT_SCOPE.into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(TOKEN_BODY)
        .create_async()
        .await;

    let credentials = Credentials {
        username: Some("user@contoso.com".to_string()),
        password: Some("hunter2".to_string()),
        ..base_credentials()
    };
    let auth = Auth::new(config_for(&server.url(), credentials)).unwrap();
    let session = auth.login().await.unwrap();

    mock.assert_async().await;
    assert_eq!(session.access_token, "eyJ0eXAi");
    assert_eq!(session.authorization_header(), "Bearer eyJ0eXAi");
    assert!(session.expires_at.is_some());
}

#[tokio::test]
async fn test_password_grant_takes_precedence_over_client_secret() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/contoso/oauth2/v2.0/token")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "password".into()),
            Matcher::UrlEncoded("client_secret".into(), "s3cr3t".into()),
        ]))
        .with_status(200)
        .with_body(TOKEN_BODY)
        .create_async()
        .await;

    let credentials = Credentials {
        username: Some("user@contoso.com".to_string()),
        password: Some("hunter2".to_string()),
        client_secret: Some("s3cr3t".to_string()),
        ..base_credentials()
    };
    let auth = Auth::new(config_for(&server.url(), credentials)).unwrap();
    auth.login().await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_client_credentials_grant() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/contoso/oauth2/v2.0/token")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "client_credentials".into()),
            Matcher::UrlEncoded("client_id".into(), "app-id".into()),
            Matcher::UrlEncoded("client_secret".into(), "s3cr3t".into()),
        ]))
        .with_status(200)
        .with_body(TOKEN_BODY)
        .create_async()
        .await;

    let credentials = Credentials {
        client_secret: Some("s3cr3t".to_string()),
        ..base_credentials()
    };
    let auth = Auth::new(config_for(&server.url(), credentials)).unwrap();
    let session = auth.login().await.unwrap();

    mock.assert_async().await;
    assert_eq!(session.access_token, "eyJ0eXAi");
}

#[tokio::test]
async fn test_rejected_credentials_return_api_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/contoso/oauth2/v2.0/token")
        .with_status(400)
        .with_body(r#"{"error":"invalid_grant"}"#)
        .create_async()
        .await;

    let credentials = Credentials {
        client_secret: Some("wrong".to_string()),
        ..base_credentials()
    };
    let auth = Auth::new(config_for(&server.url(), credentials)).unwrap();
    let error = auth.login().await.unwrap_err();

    mock.assert_async().await;
    assert_eq!(error.status(), Some(StatusCode::BAD_REQUEST));
    assert!(error.body().unwrap_or_default().contains("invalid_grant"));
}

#[tokio::test]
async fn test_access_token_skips_token_endpoint() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let credentials = Credentials {
        access_token: Some("preissued".to_string()),
        client_secret: Some("s3cr3t".to_string()),
        ..base_credentials()
    };
    let auth = Auth::new(config_for(&server.url(), credentials)).unwrap();
    let session = auth.login().await.unwrap();

    mock.assert_async().await;
    assert_eq!(session.access_token, "preissued");
    assert!(session.expires_at.is_none());
}

#[tokio::test]
async fn test_missing_credentials_are_invalid_input() {
    let auth = Auth::new(config_for("http://127.0.0.1:9", base_credentials())).unwrap();

    match auth.login().await {
        Err(AppError::InvalidInput(_)) => {}
        other => panic!("expected invalid input, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unrepresentable_token_lifetime_still_logs_in() {
    let mut server = Server::new_async().await;
    let body = format!(
        r#"{{"token_type":"Bearer","expires_in":{},"access_token":"eyJ0eXAi"}}"#,
        i64::MAX
    );
    let mock = server
        .mock("POST", "/contoso/oauth2/v2.0/token")
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    let credentials = Credentials {
        client_secret: Some("s3cr3t".to_string()),
        ..base_credentials()
    };
    let auth = Auth::new(config_for(&server.url(), credentials)).unwrap();
    let session = auth.login().await.unwrap();

    mock.assert_async().await;
    assert_eq!(session.access_token, "eyJ0eXAi");
    assert!(session.expires_at.is_none());
    assert!(!session.is_expired(Some(i64::MAX)));
}

#[tokio::test]
async fn test_session_debug_hides_token() {
    let auth = Auth::new(config_for(
        "http://127.0.0.1:9",
        Credentials {
            access_token: Some("preissued-secret".to_string()),
            ..base_credentials()
        },
    ))
    .unwrap();
    let session = auth.login().await.unwrap();

    assert!(!format!("{session:?}").contains("preissued-secret"));
}
