use super::*;

#[test]
fn validate_login_input_trims_email() {
    let req = validate_login_input("  admin@example.com  ", "secret").expect("valid");
    assert_eq!(req.email, "admin@example.com");
    assert_eq!(req.password, "secret");
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    let req = validate_login_input("a@b.com", " pass ").expect("valid");
    assert_eq!(req.password, " pass ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret").err(), Some(MISSING_FIELDS_MESSAGE));
    assert_eq!(validate_login_input("a@b.com", "").err(), Some(MISSING_FIELDS_MESSAGE));
}
