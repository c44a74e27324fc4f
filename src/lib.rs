//! courrier is a small mailer that composes an email message and hands it to
//! the local sendmail binary.
//!
//! It builds the message text itself, including a `multipart/alternative`
//! body with Base64 encoded HTML and an optional plain text fallback, then
//! pipes it to the transfer agent's standard input and reports the outcome
//! from the process exit status. It speaks no SMTP, keeps no queue and never
//! retries; every call is one complete, independent delivery.
//!
//! ## Example
//!
//! ```rust,no_run
//! use courrier::{Mail, SendmailTransport, Transport};
//!
//! # fn main() -> Result<(), courrier::Error> {
//! let mail = Mail::builder()
//!     .from("nobody@domain.tld")
//!     .reply_to("yuin@domain.tld")
//!     .to("hei@domain.tld")
//!     .subject("Happy new year")
//!     .body("Be happy!")
//!     .build();
//!
//! let sender = SendmailTransport::new();
//! sender.send(&mail)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature flags
//!
//! * **tokio1**: [`AsyncSendmailTransport`], driving the sendmail process
//!   through tokio 1.x
//! * **tracing**: debug logging of deliveries through the tracing crate

#![forbid(unsafe_code)]
#![deny(missing_docs, unreachable_pub)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod message;
pub mod transport;

pub use crate::{
    error::Error,
    message::{BodyType, Mail, MailBuilder, Recipients},
    transport::{sendmail::SendmailTransport, Transport},
};

#[cfg(feature = "tokio1")]
pub use crate::transport::{sendmail::AsyncSendmailTransport, AsyncTransport};
