use powerbi_client::prelude::*;
use std::error::Error;

#[test]
fn test_api_error_display() {
    let error = AppError::Api {
        status: StatusCode::UNAUTHORIZED,
        body: "TokenExpired".to_string(),
    };
    assert_eq!(error.to_string(), "api error 401 Unauthorized: TokenExpired");
    assert!(error.source().is_none());
}

#[test]
fn test_invalid_input_display() {
    let error = AppError::InvalidInput("missing credentials".to_string());
    assert_eq!(error.to_string(), "invalid input: missing credentials");
}

#[test]
fn test_json_error_conversion() {
    let parse_error = serde_json::from_str::<Value>("{not json").unwrap_err();
    let error: AppError = parse_error.into();

    assert!(matches!(error, AppError::Json(_)));
    assert!(error.to_string().starts_with("json error: "));
    assert!(error.source().is_some());
    assert_eq!(error.status(), None);
}

#[test]
fn test_io_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "report.pbix");
    let error: AppError = io_error.into();

    assert!(matches!(error, AppError::Io(_)));
    assert_eq!(error.to_string(), "io error: report.pbix");
    assert!(!error.is_not_found());
}

#[test]
fn test_status_response_deserializes_as_null() {
    let empty: Option<Value> = ApiResponse::Status(202).deserialize().unwrap();
    assert!(empty.is_none());
}

#[tokio::test]
async fn test_missing_upload_file_is_io_error() {
    let result = FileUpload::from_path("/definitely/not/here/report.pbix").await;
    assert!(matches!(result, Err(AppError::Io(_))));
}
