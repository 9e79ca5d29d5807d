//! Error message quality tests
//!
//! Tests that verify error messages are clear and actionable.

use smartzone_exporter::error::ExporterError;

#[test]
fn test_authentication_error_message() {
    // Given: An authentication error
    let error = ExporterError::Authentication("credential exchange returned HTTP 401".to_string());

    // When: Converting to string
    let message = error.to_string();

    // Then: Should say what failed and why
    assert!(message.contains("Authentication failed"));
    assert!(message.contains("401"));
}

#[test]
fn test_resource_error_names_path_and_status() {
    // Given: A failed data fetch
    let error = ExporterError::Resource {
        path: "query/ap".to_string(),
        status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
    };

    // When: Converting to string
    let message = error.to_string();

    // Then: The operator can tell which call failed and how
    assert!(message.contains("query/ap"), "got: {}", message);
    assert!(message.contains("503"), "got: {}", message);
}

#[test]
fn test_json_error_conversion() {
    // Given: An invalid JSON body
    let json_error = serde_json::from_str::<serde_json::Value>("{ invalid").unwrap_err();

    // When: Converting to ExporterError
    let error: ExporterError = json_error.into();

    // Then: Should be a Json variant with a descriptive message
    assert!(matches!(error, ExporterError::Json(_)));
    assert!(error.to_string().contains("JSON error"));
}

#[test]
fn test_not_found_error_message() {
    let error = ExporterError::NotFound("zone 'Campus'".to_string());

    assert_eq!(error.to_string(), "Not found: zone 'Campus'");
}

#[test]
fn test_config_error_message() {
    let error = ExporterError::Config("Failed to build HTTP client".to_string());

    let message = error.to_string();
    assert!(message.contains("Configuration error"));
    assert!(message.contains("HTTP client"));
}

#[test]
fn test_server_error_message() {
    let error = ExporterError::Server("failed to bind 0.0.0.0:9345".to_string());

    assert!(error.to_string().contains("0.0.0.0:9345"));
}

#[test]
fn test_errors_convert_into_anyhow() {
    // Given: A library error
    let error = ExporterError::NotFound("SSID 'Guest'".to_string());

    // When: Propagated through anyhow in a binary
    let wrapped: anyhow::Error = error.into();

    // Then: The original variant is still reachable
    assert!(wrapped.downcast_ref::<ExporterError>().is_some());
}
