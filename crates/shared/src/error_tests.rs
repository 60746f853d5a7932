use crate::error::AppError;
use rstest::rstest;

#[rstest]
#[case(AppError::NotFound("test".into()), "NOT_FOUND")]
#[case(AppError::Validation("test".into()), "VALIDATION_ERROR")]
#[case(AppError::Import("test".into()), "IMPORT_ERROR")]
#[case(AppError::Export("test".into()), "EXPORT_ERROR")]
#[case(AppError::Configuration("test".into()), "CONFIGURATION_ERROR")]
#[case(AppError::Internal("test".into()), "INTERNAL_ERROR")]
fn test_app_error_error_codes(#[case] err: AppError, #[case] code: &str) {
    assert_eq!(err.error_code(), code);
}

#[test]
fn test_app_error_display() {
    assert_eq!(
        format!("{}", AppError::NotFound("msg".into())),
        "Not found: msg"
    );
    assert_eq!(
        format!("{}", AppError::Validation("msg".into())),
        "Validation error: msg"
    );
    assert_eq!(
        format!("{}", AppError::Import("msg".into())),
        "Import failed: msg"
    );
    assert_eq!(
        format!("{}", AppError::Export("msg".into())),
        "Export failed: msg"
    );
    assert_eq!(
        format!("{}", AppError::Configuration("msg".into())),
        "Configuration error: msg"
    );
    assert_eq!(
        format!("{}", AppError::Internal("msg".into())),
        "Internal error: msg"
    );
}

#[test]
fn test_config_error_converts() {
    let err: AppError = config::ConfigError::Message("bad".into()).into();
    assert!(matches!(err, AppError::Configuration(_)));
    assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
}
