use super::*;
use futures::executor::block_on;

fn login_creds(email: &str, remember_me: bool) -> LoginCredentials {
    LoginCredentials { email: email.to_owned(), password: "secret123".to_owned(), remember_me }
}

#[test]
fn default_latency_is_one_second() {
    assert_eq!(MockAuthService::default().latency(), Duration::from_millis(1000));
}

#[test]
fn from_config_uses_auth_latency() {
    let cfg = AppConfig { auth_latency: Duration::from_millis(5), ..AppConfig::default() };
    assert_eq!(MockAuthService::from_config(&cfg).latency(), Duration::from_millis(5));
}

#[test]
fn login_fabricates_admin_with_submitted_email() {
    let grant = block_on(MockAuthService::new(Duration::ZERO).login(&login_creds("a@b.com", false))).unwrap();
    assert_eq!(grant.token, MOCK_TOKEN);
    assert_eq!(grant.user.email, "a@b.com");
    assert_eq!(grant.user.id, "1");
    assert_eq!(grant.user.full_name(), "John Doe");
    assert_eq!(grant.user.role, UserRole::Admin);
    assert_eq!(grant.user.created_at, grant.user.updated_at);
}

#[test]
fn login_ignores_remember_me() {
    let service = MockAuthService::new(Duration::ZERO);
    let with = block_on(service.login(&login_creds("a@b.com", true))).unwrap();
    let without = block_on(service.login(&login_creds("a@b.com", false))).unwrap();
    assert_eq!(with.token, without.token);
    assert_eq!(with.user.email, without.user.email);
    assert_eq!(with.user.role, without.user.role);
}

#[test]
fn register_uses_submitted_names_and_default_role() {
    let creds = RegisterCredentials {
        first_name: " Ada ".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "Secret1!x".to_owned(),
    };
    let grant = block_on(MockAuthService::new(Duration::ZERO).register(&creds)).unwrap();
    assert_eq!(grant.token, MOCK_TOKEN);
    assert_eq!(grant.user.first_name, "Ada");
    assert_eq!(grant.user.last_name, "Lovelace");
    assert_eq!(grant.user.email, "ada@example.com");
    assert_eq!(grant.user.role, UserRole::User);
    assert!(uuid::Uuid::parse_str(&grant.user.id).is_ok());
}

#[test]
fn rejecting_service_fails_with_form_messages() {
    let service = MockAuthService::rejecting(Duration::ZERO);
    let err = block_on(service.login(&login_creds("a@b.com", false))).unwrap_err();
    assert_eq!(err.user_message(), LOGIN_FAILED_MESSAGE);

    let err = block_on(service.register(&RegisterCredentials::default())).unwrap_err();
    assert!(matches!(err, AuthError::CredentialRejected(ref m) if m == REGISTER_FAILED_MESSAGE));
}
