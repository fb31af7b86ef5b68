use std::error::Error;

use postcheck::errors::ReportError;

#[test]
fn test_report_error_implements_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    let error = ReportError::FetchError("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_report_error_display() {
    let error = ReportError::FetchError("status 404".to_string());
    assert_eq!(format!("{error}"), "Failed to fetch page: status 404");

    let error = ReportError::LlmError("Model unavailable".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to access LLM API: Model unavailable"
    );

    let error = ReportError::OutputConflict("out.md".to_string());
    assert_eq!(format!("{error}"), "Output file already exists: out.md");
}

#[test]
fn test_report_error_from_conversions() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    match ReportError::from(io_err) {
        ReportError::IoError(msg) => assert!(msg.contains("denied")),
        other => panic!("Unexpected error type: {other:?}"),
    }

    let url_err = url::Url::parse("not a url").unwrap_err();
    match ReportError::from(url_err) {
        ReportError::ConfigError(_) => {}
        other => panic!("Unexpected error type: {other:?}"),
    }

    // We can't easily construct a reqwest::Error directly, but we can
    // verify that the From<reqwest::Error> impl exists.
    #[allow(unused)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> ReportError {
        ReportError::from(err)
    }
}
