use super::*;

// =============================================================
// Credentials validation
// =============================================================

#[test]
fn empty_fields_are_rejected_locally() {
    assert_eq!(validate_credentials("", "pw"), Err(CREDENTIALS_REQUIRED_TEXT));
    assert_eq!(validate_credentials("bob", ""), Err(CREDENTIALS_REQUIRED_TEXT));
    assert_eq!(validate_credentials("", ""), Err(CREDENTIALS_REQUIRED_TEXT));
}

#[test]
fn whitespace_only_username_is_rejected() {
    assert_eq!(validate_credentials("   ", "pw"), Err(CREDENTIALS_REQUIRED_TEXT));
}

#[test]
fn username_is_trimmed_and_password_kept_verbatim() {
    let (username, password) = validate_credentials(" bob ", " pw ").expect("valid");
    assert_eq!(username, "bob");
    assert_eq!(password, " pw ");
}
