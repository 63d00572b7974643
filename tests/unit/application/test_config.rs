use powerbi_client::prelude::*;
use std::collections::HashMap;

fn credentials() -> Credentials {
    Credentials {
        tenant_id: "contoso".to_string(),
        client_id: "app".to_string(),
        ..Credentials::default()
    }
}

#[test]
fn test_with_access_token_uses_defaults() {
    let config = Config::with_access_token("token");

    assert_eq!(config.credentials.access_token.as_deref(), Some("token"));
    assert_eq!(config.credentials.tenant_id, DEFAULT_TENANT_ID);
    assert_eq!(config.rest_api.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.auth.authority_url, DEFAULT_AUTHORITY_URL);
    assert_eq!(config.auth.scope, DEFAULT_SCOPE);
}

#[test]
fn test_has_credential() {
    assert!(!credentials().has_credential());

    let password_only = Credentials {
        password: Some("secret".to_string()),
        ..credentials()
    };
    assert!(!password_only.has_credential());

    let user = Credentials {
        username: Some("user@contoso.com".to_string()),
        password: Some("secret".to_string()),
        ..credentials()
    };
    assert!(user.has_credential());

    let application = Credentials {
        client_secret: Some("secret".to_string()),
        ..credentials()
    };
    assert!(application.has_credential());
}

#[test]
fn test_secrets_are_not_serialized() {
    let config = Config {
        credentials: Credentials {
            username: Some("user@contoso.com".to_string()),
            password: Some("hunter2".to_string()),
            client_secret: Some("s3cr3t".to_string()),
            access_token: Some("eyJ0".to_string()),
            ..credentials()
        },
        rest_api: RestApiConfig::default(),
        auth: AuthConfig::default(),
    };

    let serialized = serde_json::to_string(&config).unwrap();
    assert!(serialized.contains("user@contoso.com"));
    assert!(!serialized.contains("hunter2"));
    assert!(!serialized.contains("s3cr3t"));
    assert!(!serialized.contains("eyJ0"));

    let display = config.to_string();
    assert!(!display.contains("hunter2"));
}

#[test]
fn test_config_deserializes_without_secrets() {
    let json = r#"{
        "credentials": {"tenant_id": "contoso", "client_id": "app", "username": null},
        "rest_api": {"base_url": "http://localhost:8080/v1.0"},
        "auth": {"authority_url": "http://localhost:8080", "scope": "scope"}
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.credentials.tenant_id, "contoso");
    assert!(config.credentials.client_secret.is_none());
    assert!(config.credentials.access_token.is_none());
    assert_eq!(config.rest_api.base_url, "http://localhost:8080/v1.0");
}

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let values: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| values.get(key).cloned()
}

#[test]
fn test_from_lookup_maps_every_variable() {
    let config = Config::from_lookup(lookup(&[
        ("POWERBI_TENANT_ID", "contoso"),
        ("POWERBI_CLIENT_ID", "app-id"),
        ("POWERBI_CLIENT_SECRET", "s3cr3t"),
        ("POWERBI_USERNAME", "user@contoso.com"),
        ("POWERBI_PASSWORD", "hunter2"),
        ("POWERBI_ACCESS_TOKEN", "eyJ0"),
        ("POWERBI_BASE_URL", "http://localhost:8080/v1.0"),
        ("POWERBI_AUTHORITY_URL", "http://localhost:8081"),
        ("POWERBI_SCOPE", "custom/.default"),
    ]));

    assert_eq!(config.credentials.tenant_id, "contoso");
    assert_eq!(config.credentials.client_id, "app-id");
    assert_eq!(config.credentials.client_secret.as_deref(), Some("s3cr3t"));
    assert_eq!(config.credentials.username.as_deref(), Some("user@contoso.com"));
    assert_eq!(config.credentials.password.as_deref(), Some("hunter2"));
    assert_eq!(config.credentials.access_token.as_deref(), Some("eyJ0"));
    assert_eq!(config.rest_api.base_url, "http://localhost:8080/v1.0");
    assert_eq!(config.auth.authority_url, "http://localhost:8081");
    assert_eq!(config.auth.scope, "custom/.default");
}

#[test]
fn test_blank_values_fall_back_to_defaults() {
    let config = Config::from_lookup(lookup(&[
        ("POWERBI_TENANT_ID", ""),
        ("POWERBI_BASE_URL", ""),
        ("POWERBI_AUTHORITY_URL", "  "),
        ("POWERBI_SCOPE", ""),
        ("POWERBI_ACCESS_TOKEN", ""),
        ("POWERBI_CLIENT_SECRET", ""),
    ]));

    assert_eq!(config.credentials.tenant_id, DEFAULT_TENANT_ID);
    assert_eq!(config.rest_api.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.auth.authority_url, DEFAULT_AUTHORITY_URL);
    assert_eq!(config.auth.scope, DEFAULT_SCOPE);
    assert!(config.credentials.access_token.is_none());
    assert!(!config.credentials.has_credential());

    let session = PowerBiSession::with_token(&config.rest_api.base_url, "t").unwrap();
    assert_eq!(
        session.build_url("myorg/datasets"),
        "https://api.powerbi.com/v1.0/myorg/datasets"
    );
    let auth = Auth::new(Arc::new(config)).unwrap();
    assert_eq!(
        auth.token_url(),
        "https://login.microsoftonline.com/common/oauth2/v2.0/token"
    );
}

// The only test in this binary touching POWERBI_* process variables.
#[test]
fn test_new_reads_process_environment() {
    let vars = [
        ("POWERBI_TENANT_ID", ""),
        ("POWERBI_BASE_URL", ""),
        ("POWERBI_CLIENT_ID", "env-app"),
        ("POWERBI_ACCESS_TOKEN", "env-token"),
        ("POWERBI_SCOPE", "env/.default"),
    ];
    for (key, value) in vars {
        // SAFETY: no other test in this binary reads or writes these variables
        unsafe { std::env::set_var(key, value) };
    }

    let config = Config::new();

    for (key, _) in vars {
        // SAFETY: see above
        unsafe { std::env::remove_var(key) };
    }

    assert_eq!(config.credentials.tenant_id, DEFAULT_TENANT_ID);
    assert_eq!(config.rest_api.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.credentials.client_id, "env-app");
    assert_eq!(config.credentials.access_token.as_deref(), Some("env-token"));
    assert_eq!(config.auth.scope, "env/.default");
}
