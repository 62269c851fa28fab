use crate::models::user_input::{FIELDS_REQUIRED_MESSAGE, INVALID_EMAIL_MESSAGE};
use crate::{CoreError, FieldLimits, NewUser, UserInput};

use googletest::prelude::*;

fn message_of(error: CoreError) -> String {
    match error {
        CoreError::Validation { message, .. } => message,
    }
}

#[test]
fn given_padded_fields_when_validate_then_fields_are_trimmed() {
    let input = UserInput::new("  John Doe ", "\tjohn@example.com  ");

    let result = input.validate(&FieldLimits::default());

    assert_that!(
        result,
        ok(eq(&NewUser {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        }))
    );
}

#[test]
fn given_blank_name_when_validate_then_required_error() {
    let input = UserInput::new("   ", "john@example.com");

    let error = input.validate(&FieldLimits::default()).unwrap_err();

    assert_that!(message_of(error).as_str(), eq(FIELDS_REQUIRED_MESSAGE));
}

#[test]
fn given_missing_email_when_deserialized_and_validated_then_required_error() {
    let input: UserInput = serde_json::from_str(r#"{"name":"John"}"#).unwrap();

    let error = input.validate(&FieldLimits::default()).unwrap_err();

    assert_that!(message_of(error).as_str(), eq(FIELDS_REQUIRED_MESSAGE));
}

#[test]
fn given_malformed_email_when_validate_then_invalid_email_error() {
    let input = UserInput::new("John", "john.example.com");

    let error = input.validate(&FieldLimits::default()).unwrap_err();

    match error {
        CoreError::Validation { message, field, .. } => {
            assert_that!(message.as_str(), eq(INVALID_EMAIL_MESSAGE));
            assert_that!(field, some(eq("email")));
        }
    }
}

#[test]
fn given_name_over_limit_when_validate_then_rejected() {
    let limits = FieldLimits {
        max_name_length: 5,
        ..FieldLimits::default()
    };
    let input = UserInput::new("Johnathan", "john@example.com");

    let error = input.validate(&limits).unwrap_err();

    assert_that!(message_of(error), contains_substring("at most 5"));
}

#[test]
fn given_name_at_limit_when_validate_then_ok() {
    let limits = FieldLimits {
        max_name_length: 4,
        ..FieldLimits::default()
    };
    let input = UserInput::new("John", "john@example.com");

    assert_that!(input.validate(&limits), ok(anything()));
}

#[test]
fn given_email_over_limit_when_validate_then_rejected() {
    let limits = FieldLimits {
        max_email_length: 10,
        ..FieldLimits::default()
    };
    let input = UserInput::new("John", "john@example.com");

    let error = input.validate(&limits).unwrap_err();

    assert_that!(message_of(error), contains_substring("at most 10"));
}

