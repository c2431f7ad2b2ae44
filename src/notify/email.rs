//! # Email Notifications
//!
//! Email subscriber for section updates, and the senders behind it.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

use super::errors::{NotifyError, NotifyResult};
use super::event::SectionUpdateEvent;
use super::subject::ContentSubscriber;

/// SMTP configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailConfig {
    /// SMTP server host
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,

    /// SMTP server port
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    /// SMTP username; empty disables authentication
    #[serde(default)]
    pub smtp_user: String,

    /// SMTP password (should come from secrets)
    #[serde(default)]
    pub smtp_password: String,

    /// From email address
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// From name
    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// Admin panel base URL used in links
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    1025
}

fn default_from_email() -> String {
    "noreply@pagesmith.local".to_string()
}

fn default_from_name() -> String {
    "Pagesmith".to_string()
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_user: String::new(),
            smtp_password: String::new(),
            from_email: default_from_email(),
            from_name: default_from_name(),
            base_url: default_base_url(),
        }
    }
}

/// Email template types
#[derive(Debug, Clone, PartialEq)]
pub enum EmailTemplate {
    /// A section translation changed
    SectionUpdated {
        recipient: String,
        event: SectionUpdateEvent,
    },
}

impl EmailTemplate {
    /// Renders (to, subject, body)
    pub fn render(&self, base_url: &str) -> (String, String, String) {
        match self {
            EmailTemplate::SectionUpdated { recipient, event } => {
                let subject = format!(
                    "[{}] {} section updated ({})",
                    event.page_type, event.section_type, event.language
                );
                let link = format!(
                    "{}/sections/{}/translations/{}",
                    base_url.trim_end_matches('/'),
                    event.section_id,
                    event.language
                );
                let body = format!(
                    "Hello,\n\n\
                    The '{}' section on the '{}' page was updated in language '{}' at {}.\n\n\
                    Review it here:\n\n\
                    {}\n\n\
                    You receive this message because you are subscribed to content updates.",
                    event.section_type,
                    event.page_type,
                    event.language,
                    event.occurred_at.format("%Y-%m-%d %H:%M UTC"),
                    link
                );
                (recipient.clone(), subject, body)
            }
        }
    }
}

/// Email sender trait for abstraction
pub trait EmailSender: Send + Sync {
    /// Send an email
    fn send(&self, template: EmailTemplate) -> NotifyResult<()>;
}

/// In-memory sender for tests and disabled SMTP
#[derive(Debug, Default)]
pub struct MockEmailSender {
    sent: RwLock<Vec<EmailTemplate>>,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get number of sent emails
    pub fn sent_count(&self) -> usize {
        self.sent.read().map(|sent| sent.len()).unwrap_or(0)
    }

    /// Copy of every sent email
    pub fn sent(&self) -> Vec<EmailTemplate> {
        self.sent.read().map(|sent| sent.clone()).unwrap_or_default()
    }
}

impl EmailSender for MockEmailSender {
    fn send(&self, template: EmailTemplate) -> NotifyResult<()> {
        self.sent
            .write()
            .map_err(|_| NotifyError::Delivery("mock outbox lock poisoned".into()))?
            .push(template);
        Ok(())
    }
}

/// SMTP email sender
pub struct SmtpEmailSender {
    config: EmailConfig,
}

impl SmtpEmailSender {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }
}

impl EmailSender for SmtpEmailSender {
    fn send(&self, template: EmailTemplate) -> NotifyResult<()> {
        use lettre::{
            message::header::ContentType, transport::smtp::authentication::Credentials, Message,
            SmtpTransport, Transport,
        };

        let (to, subject, body) = template.render(&self.config.base_url);

        let email = Message::builder()
            .from(
                format!("{} <{}>", self.config.from_name, self.config.from_email)
                    .parse()
                    .map_err(|e| NotifyError::InvalidMessage(format!("Invalid from address: {}", e)))?,
            )
            .to(to
                .parse()
                .map_err(|e| NotifyError::InvalidMessage(format!("Invalid to address: {}", e)))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| NotifyError::InvalidMessage(format!("Failed to build email: {}", e)))?;

        let mailer = if self.config.smtp_user.is_empty() {
            // Local development relays without auth or TLS
            SmtpTransport::builder_dangerous(&self.config.smtp_host)
                .port(self.config.smtp_port)
                .build()
        } else {
            let creds = Credentials::new(
                self.config.smtp_user.clone(),
                self.config.smtp_password.clone(),
            );

            SmtpTransport::relay(&self.config.smtp_host)
                .map_err(|e| NotifyError::Delivery(format!("SMTP relay error: {}", e)))?
                .credentials(creds)
                .port(self.config.smtp_port)
                .build()
        };

        mailer
            .send(&email)
            .map_err(|e| NotifyError::Delivery(format!("Failed to send email: {}", e)))?;

        Ok(())
    }
}

/// SMTP sender when configured, otherwise an in-memory outbox
pub fn create_email_sender(config: Option<EmailConfig>) -> Arc<dyn EmailSender> {
    match config {
        Some(cfg) => Arc::new(SmtpEmailSender::new(cfg)),
        None => Arc::new(MockEmailSender::new()),
    }
}

/// Subscriber that emails every recipient about each update
pub struct EmailUpdateSubscriber {
    sender: Arc<dyn EmailSender>,
    recipients: Vec<String>,
}

impl EmailUpdateSubscriber {
    pub fn new(sender: Arc<dyn EmailSender>, recipients: Vec<String>) -> Self {
        Self { sender, recipients }
    }
}

impl ContentSubscriber for EmailUpdateSubscriber {
    /// Tries every recipient; reports the first failure after the loop
    fn update(&self, event: &SectionUpdateEvent) -> NotifyResult<()> {
        let mut first_error = None;
        for recipient in &self.recipients {
            let template = EmailTemplate::SectionUpdated {
                recipient: recipient.clone(),
                event: event.clone(),
            };
            if let Err(e) = self.sender.send(template) {
                tracing::warn!(%recipient, error = %e, "update email not sent");
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn identity(&self) -> Option<&str> {
        Some("email-notifier")
    }
}
