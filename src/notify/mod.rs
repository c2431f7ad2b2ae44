//! # Content Update Notifier
//!
//! Observer-style fan-out of committed section translation writes.
//!
//! - `ContentUpdateSubject` keeps an ordered, deduplicated subscriber list
//! - `ContentSubscriber` is the seam for email, audit or cache invalidation
//! - `EmailUpdateSubscriber` mails a fixed recipient list through an `EmailSender`

mod email;
mod errors;
mod event;
mod subject;

pub use email::{
    create_email_sender, EmailConfig, EmailSender, EmailTemplate, EmailUpdateSubscriber,
    MockEmailSender, SmtpEmailSender,
};
pub use errors::{NotifyError, NotifyResult};
pub use event::SectionUpdateEvent;
pub use subject::{ContentSubscriber, ContentUpdateSubject, PublishReport};
