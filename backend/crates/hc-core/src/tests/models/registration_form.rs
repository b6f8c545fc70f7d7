use crate::{RegistrationForm, is_valid_email};

use googletest::prelude::*;

fn valid_form() -> RegistrationForm {
    RegistrationForm {
        username: "ada".to_string(),
        email: "ada@example.com".to_string(),
        password: "secret1".to_string(),
        confirm_password: "secret1".to_string(),
        terms_accepted: true,
        ..RegistrationForm::default()
    }
}

fn rejection(form: &RegistrationForm) -> String {
    form.validate().unwrap_err().user_message()
}

#[test]
fn given_valid_form_when_validated_then_ok() {
    assert_that!(valid_form().validate(), ok(anything()));
}

#[test]
fn given_default_form_then_role_is_user() {
    assert_eq!(RegistrationForm::default().role, "USER");
}

#[test]
fn given_blank_username_when_validated_then_rejected() {
    let form = RegistrationForm {
        username: "   ".to_string(),
        ..valid_form()
    };

    assert_eq!(rejection(&form), "Username cannot be empty.");
}

#[test]
fn given_malformed_email_when_validated_then_rejected() {
    let form = RegistrationForm {
        email: "ada.example.com".to_string(),
        ..valid_form()
    };

    assert_eq!(rejection(&form), "Please enter a valid email address.");
}

#[test]
fn given_five_character_password_when_validated_then_rejected_with_length_message() {
    let form = RegistrationForm {
        password: "abcde".to_string(),
        confirm_password: "abcde".to_string(),
        ..valid_form()
    };

    assert_eq!(rejection(&form), "Password must be at least 6 characters.");
}

#[test]
fn given_six_character_password_when_validated_then_ok() {
    let form = RegistrationForm {
        password: "abcdef".to_string(),
        confirm_password: "abcdef".to_string(),
        ..valid_form()
    };

    assert_that!(form.validate(), ok(anything()));
}

#[test]
fn given_mismatched_confirmation_when_validated_then_rejected() {
    let form = RegistrationForm {
        confirm_password: "secret2".to_string(),
        ..valid_form()
    };

    assert_eq!(rejection(&form), "Passwords do not match.");
}

#[test]
fn given_unchecked_terms_when_otherwise_valid_then_rejected() {
    let form = RegistrationForm {
        terms_accepted: false,
        ..valid_form()
    };

    assert_eq!(rejection(&form), "You must agree to the Terms and Conditions.");
}

#[test]
fn given_several_problems_then_first_rule_wins() {
    let form = RegistrationForm {
        email: "nope".to_string(),
        password: "abc".to_string(),
        terms_accepted: false,
        ..valid_form()
    };

    assert_eq!(rejection(&form), "Please enter a valid email address.");
}

#[test]
fn test_email_shapes() {
    assert!(is_valid_email("a@b.c"));
    assert!(is_valid_email("first.last@sub.example.org"));
    assert!(is_valid_email("x y@b.c"));

    assert!(!is_valid_email(""));
    assert!(!is_valid_email("@b.c"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a@.c"));
    assert!(!is_valid_email("a@b."));
    assert!(!is_valid_email("a @b.c"));
    assert!(!is_valid_email("a@b .c"));
}
