//! Shared test helpers

use portfolio_contact::config::SmtpConfig;
use portfolio_contact::email::EmailService;

pub struct TestApp {
    pub router: axum::Router,
    pub email_service: EmailService,
}

pub fn test_smtp_config() -> SmtpConfig {
    SmtpConfig {
        host: "smtp.example.com".to_string(),
        port: 587,
        username: "relay@example.com".to_string(),
        password: "app-password".to_string(),
        from_address: "relay@example.com".to_string(),
        from_name: "Portfolio Contact".to_string(),
        contact_address: "owner@example.com".to_string(),
    }
}

/// Build the app router backed by a mock email service that records
/// sends instead of opening an SMTP connection.
pub fn create_test_app() -> TestApp {
    let email_service =
        EmailService::new_mock(&test_smtp_config()).expect("mock email service should build");

    TestApp {
        router: portfolio_contact::create_app(email_service.clone()),
        email_service,
    }
}
