use super::*;

fn create_error(code: &str) -> FormatError {
    FormatError::new(code.to_string(), "some cause".to_string(), "some action".to_string())
}

#[test]
fn can_display_format_error() {
    assert_eq!(create_error("E1000").to_string(), "E1000, cause: 'some cause', action: 'some action'.");
}

#[test]
fn can_serialize_format_error_without_details() {
    let json = create_error("E1000").to_json();

    assert!(json.contains("\"code\": \"E1000\""));
    assert!(!json.contains("details"));
}

#[test]
fn can_serialize_format_error_with_details() {
    let error = FormatError::new_with_details(
        "E1101".to_string(),
        "cause".to_string(),
        "action".to_string(),
        "known categories: van".to_string(),
    );

    assert!(error.to_json().contains("\"details\": \"known categories: van\""));
}

#[test]
fn can_combine_multiple_errors() {
    let errors = MultiFormatError::from(vec![create_error("E1000"), create_error("E1100")]);

    assert_eq!(errors.codes(), vec!["E1000", "E1100"]);
    assert_eq!(errors.to_string().lines().count(), 2);
    assert_eq!(errors.into_iter().map(|error| error.code).collect::<Vec<_>>(), vec!["E1000", "E1100"]);
}

#[test]
fn can_serialize_multiple_errors_as_array() {
    let errors = MultiFormatError::from(create_error("E0000"));

    let json: serde_json::Value = serde_json::from_str(errors.to_json().as_str()).unwrap();

    assert_eq!(json.as_array().map(|errors| errors.len()), Some(1));
}
