//! Email delivery service using lettre

use std::sync::{Arc, Mutex};

use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::config::SmtpConfig;
use crate::contact::ContactEmail;

#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("Failed to render email template: {0}")]
    Template(#[from] askama::Error),

    #[error("Invalid email address format: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Failed to build email message: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    #[error("SMTP transport error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// A delivery recorded by a mock service instead of being sent.
#[derive(Debug, Clone)]
pub struct RecordedEmail {
    pub to: String,
    pub reply_to: String,
    pub subject: String,
}

/// Email service for relaying contact submissions over SMTP
#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
    from: Mailbox,
    to: Mailbox,
    skip_sending: bool,
    recorded: Arc<Mutex<Vec<RecordedEmail>>>,
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &SmtpConfig) -> Result<Self, EmailError> {
        tracing::info!(
            smtp_host = %config.host,
            smtp_port = config.port,
            from = %config.from_address,
            to = %config.contact_address,
            "Email service initialized with authentication and TLS"
        );

        // SmtpTransport::relay() uses STARTTLS by default, which is
        // appropriate for most SMTP servers on port 587
        let creds = Credentials::new(config.username.clone(), config.password.clone());
        let mailer = SmtpTransport::relay(&config.host)?
            .port(config.port)
            .credentials(creds)
            .build();

        Ok(Self {
            mailer,
            from: format!("{} <{}>", config.from_name, config.from_address).parse()?,
            to: config.contact_address.parse()?,
            skip_sending: false,
            recorded: Arc::new(Mutex::new(Vec::new())),
        })
    }

    /// Create a mock email service for testing (skips actual SMTP)
    ///
    /// Messages are still composed and address-checked, then recorded
    /// instead of being handed to a transport.
    pub fn new_mock(config: &SmtpConfig) -> Result<Self, EmailError> {
        let mailer = SmtpTransport::builder_dangerous("localhost")
            .port(1025)
            .build();

        tracing::info!(
            from = %config.from_address,
            to = %config.contact_address,
            "Mock email service initialized (SMTP calls skipped)"
        );

        Ok(Self {
            mailer,
            from: format!("{} <{}>", config.from_name, config.from_address).parse()?,
            to: config.contact_address.parse()?,
            skip_sending: true,
            recorded: Arc::new(Mutex::new(Vec::new())),
        })
    }

    /// Deliver a composed contact email to the configured inbox.
    ///
    /// Exactly one send attempt; success means the transport accepted the
    /// message, nothing more.
    pub async fn send(&self, email: &ContactEmail) -> Result<(), EmailError> {
        let reply_to: Mailbox = email.reply_to.parse()?;

        let message = Message::builder()
            .from(self.from.clone())
            .reply_to(reply_to)
            .to(self.to.clone())
            .subject(&email.subject)
            .multipart(MultiPart::alternative_plain_html(
                email.text_body.clone(),
                email.html_body.clone(),
            ))?;

        if self.skip_sending {
            tracing::info!(subject = %email.subject, "Mock email service: recording send instead of SMTP");
            self.recorded
                .lock()
                .expect("recorded sends lock poisoned")
                .push(RecordedEmail {
                    to: self.to.email.to_string(),
                    reply_to: email.reply_to.clone(),
                    subject: email.subject.clone(),
                });
            return Ok(());
        }

        self.mailer.send(&message)?;

        tracing::info!(subject = %email.subject, "Contact email accepted by SMTP transport");

        Ok(())
    }

    /// Sends recorded by a mock service, in submission order.
    pub fn recorded_sends(&self) -> Vec<RecordedEmail> {
        self.recorded
            .lock()
            .expect("recorded sends lock poisoned")
            .clone()
    }
}
