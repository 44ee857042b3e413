//! Contact submission model and email composition

use askama::Template;
use serde::Deserialize;
use validator::Validate;

use crate::email::EmailError;

/// A contact form submission from a site visitor.
///
/// Missing fields deserialize as empty strings so that an absent field and
/// an empty one fail validation the same way. A submission is well-formed
/// iff all three fields are non-empty after trimming.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactSubmission {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub message: String,
}

impl ContactSubmission {
    /// Remove surrounding whitespace from every field before validation.
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

/// A composed outbound message, ready for delivery.
#[derive(Debug, Clone)]
pub struct ContactEmail {
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
    /// Visitor address; set as reply-to so the owner can answer directly.
    pub reply_to: String,
}

/// Contact notification email HTML template
#[derive(Template)]
#[template(path = "emails/contact-notification.html")]
struct ContactNotificationHtmlTemplate<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

/// Contact notification email plain text template
#[derive(Template)]
#[template(path = "emails/contact-notification.txt")]
struct ContactNotificationTextTemplate<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

/// Compose the notification email for a well-formed submission.
///
/// Pure rendering step with no transport involved. The HTML body is
/// rendered through askama, which escapes HTML-significant characters in
/// the visitor-supplied fields.
pub fn compose(submission: &ContactSubmission) -> Result<ContactEmail, EmailError> {
    let html_body = ContactNotificationHtmlTemplate {
        name: &submission.name,
        email: &submission.email,
        message: &submission.message,
    }
    .render()?;

    let text_body = ContactNotificationTextTemplate {
        name: &submission.name,
        email: &submission.email,
        message: &submission.message,
    }
    .render()?;

    Ok(ContactEmail {
        subject: format!("Portfolio Contact: Message from {}", submission.name),
        text_body,
        html_body,
        reply_to: submission.email.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            message: "Hello!".to_string(),
        }
    }

    #[test]
    fn test_well_formed_submission_validates() {
        assert!(submission().validate().is_ok());
    }

    #[test]
    fn test_empty_fields_fail_validation() {
        for field in ["name", "email", "message"] {
            let mut input = submission();
            match field {
                "name" => input.name = String::new(),
                "email" => input.email = String::new(),
                _ => input.message = String::new(),
            }
            let result = input.validate();
            assert!(result.is_err(), "{field} should be required");
            assert!(result.unwrap_err().field_errors().contains_key(field));
        }
    }

    #[test]
    fn test_whitespace_only_fields_fail_after_trimming() {
        let input = ContactSubmission {
            name: "   ".to_string(),
            email: "jane@example.com".to_string(),
            message: "\n\t".to_string(),
        }
        .trimmed();

        assert!(input.validate().is_err());
    }

    #[test]
    fn test_trimmed_preserves_inner_content() {
        let input = ContactSubmission {
            name: "  Jane Doe  ".to_string(),
            email: " jane@example.com ".to_string(),
            message: "  Hello there!  ".to_string(),
        }
        .trimmed();

        assert_eq!(input.name, "Jane Doe");
        assert_eq!(input.email, "jane@example.com");
        assert_eq!(input.message, "Hello there!");
    }

    #[test]
    fn test_compose_subject_contains_visitor_name() {
        let email = compose(&submission()).unwrap();
        assert_eq!(email.subject, "Portfolio Contact: Message from Jane Doe");
    }

    #[test]
    fn test_compose_reply_to_is_visitor_address() {
        let email = compose(&submission()).unwrap();
        assert_eq!(email.reply_to, "jane@example.com");
    }

    #[test]
    fn test_compose_text_body_contains_all_fields() {
        let email = compose(&submission()).unwrap();
        assert!(email.text_body.contains("Jane Doe"));
        assert!(email.text_body.contains("jane@example.com"));
        assert!(email.text_body.contains("Hello!"));
        // Fixed field order: name before email before message
        let name_pos = email.text_body.find("Jane Doe").unwrap();
        let email_pos = email.text_body.find("jane@example.com").unwrap();
        let message_pos = email.text_body.find("Hello!").unwrap();
        assert!(name_pos < email_pos);
        assert!(email_pos < message_pos);
    }

    #[test]
    fn test_compose_escapes_html_in_message() {
        let mut input = submission();
        input.message = "<script>alert('hi')</script>".to_string();

        let email = compose(&input).unwrap();
        assert!(!email.html_body.contains("<script>"));
        assert!(email.html_body.contains("&lt;script&gt;"));
        // Plain text rendering keeps the raw message
        assert!(email.text_body.contains("<script>alert('hi')</script>"));
    }

    #[test]
    fn test_compose_escapes_html_in_name() {
        let mut input = submission();
        input.name = "Jane <b>Doe</b>".to_string();

        let email = compose(&input).unwrap();
        assert!(!email.html_body.contains("<b>Doe</b>"));
        assert!(email.html_body.contains("&lt;b&gt;Doe&lt;/b&gt;"));
    }
}
