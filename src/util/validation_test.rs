use super::*;

fn valid_register_form() -> RegisterForm {
    RegisterForm {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "Secret1!x".to_owned(),
        confirm_password: "Secret1!x".to_owned(),
        accept_terms: true,
    }
}

// =============================================================
// Email
// =============================================================

#[test]
fn email_accepts_common_addresses() {
    assert!(is_valid_email("a@b.com"));
    assert!(is_valid_email("First.Last+tag@Mail.Example.CO"));
    assert!(is_valid_email("x_y%z-1@sub-domain.io"));
}

#[test]
fn email_rejects_malformed_addresses() {
    assert!(!is_valid_email("ab.com"));
    assert!(!is_valid_email("@b.com"));
    assert!(!is_valid_email("a@.com"));
    assert!(!is_valid_email("a@b.c"));
    assert!(!is_valid_email("a@b.c0m"));
    assert!(!is_valid_email("a b@c.com"));
    assert!(!is_valid_email("a@b@c.com"));
    assert!(!is_valid_email("a@bcom"));
}

// =============================================================
// Login form
// =============================================================

#[test]
fn login_trims_email_and_keeps_remember_me() {
    let creds = validate_login("  a@b.com ", "secret123", true).unwrap();
    assert_eq!(creds.email, "a@b.com");
    assert_eq!(creds.password, "secret123");
    assert!(creds.remember_me);
}

#[test]
fn login_requires_both_fields() {
    let errors = validate_login("", "", false).unwrap_err();
    assert_eq!(errors.email, Some("Email is required"));
    assert_eq!(errors.password, Some("Password is required"));
}

#[test]
fn login_rejects_bad_email_and_short_password() {
    let errors = validate_login("nope", "12345", false).unwrap_err();
    assert_eq!(errors.email, Some("Invalid email address"));
    assert_eq!(errors.password, Some("Password must be at least 6 characters"));
}

#[test]
fn login_accepts_six_character_password() {
    assert!(validate_login("a@b.com", "123456", false).is_ok());
}

// =============================================================
// Register form
// =============================================================

#[test]
fn register_accepts_valid_form() {
    let creds = validate_register(&valid_register_form()).unwrap();
    assert_eq!(creds.first_name, "Ada");
    assert_eq!(creds.email, "ada@example.com");
}

#[test]
fn register_requires_names_and_terms() {
    let form = RegisterForm { first_name: " ".to_owned(), last_name: String::new(), accept_terms: false, ..valid_register_form() };
    let errors = validate_register(&form).unwrap_err();
    assert_eq!(errors.first_name, Some("First name is required"));
    assert_eq!(errors.last_name, Some("Last name is required"));
    assert!(errors.terms.is_some());
    assert_eq!(errors.email, None);
}

#[test]
fn register_password_rules() {
    let short = RegisterForm { password: "Ab1!".to_owned(), confirm_password: "Ab1!".to_owned(), ..valid_register_form() };
    assert_eq!(validate_register(&short).unwrap_err().password, Some("Password must be at least 8 characters"));

    for weak in ["alllower1!", "ALLUPPER1!", "NoDigits!!", "NoSpecial12", "Has Space1!"] {
        let form = RegisterForm { password: weak.to_owned(), confirm_password: weak.to_owned(), ..valid_register_form() };
        let message = validate_register(&form).unwrap_err().password.unwrap();
        assert!(message.starts_with("Password must include"), "{weak}");
    }
}

#[test]
fn register_confirm_must_match() {
    let form = RegisterForm { confirm_password: "Secret1!y".to_owned(), ..valid_register_form() };
    assert_eq!(validate_register(&form).unwrap_err().confirm_password, Some("The passwords do not match"));

    let form = RegisterForm { confirm_password: String::new(), ..valid_register_form() };
    assert_eq!(validate_register(&form).unwrap_err().confirm_password, Some("Please confirm your password"));
}

#[test]
fn strong_password_examples() {
    assert!(is_strong_password("Secret1!x"));
    assert!(!is_strong_password("Secret1#x"));
}
