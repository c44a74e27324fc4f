//! ### Sending Mails
//!
//! A transport takes a [`Mail`], validates and renders it, and delivers the
//! resulting text. The only transport shipped with this crate is
//! [`SendmailTransport`](sendmail::SendmailTransport), which pipes the
//! message to the local sendmail command; the [`Transport`] seam exists so
//! the composition path can be reused and tested without a real mail
//! transfer agent.

#[cfg(feature = "tokio1")]
use async_trait::async_trait;

use crate::{error::Error, message::Mail};

pub mod sendmail;

/// Blocking transport method for mails
pub trait Transport {
    /// Response produced by the transport
    type Ok;
    /// Error produced by the transport
    type Error: From<Error>;

    /// Validates and renders the mail, then hands it to the transport
    fn send(&self, mail: &Mail) -> Result<Self::Ok, Self::Error> {
        let raw = mail.formatted()?;
        self.send_raw(mail.envelope_from(), raw.as_bytes())
    }

    /// Delivers an already-rendered message
    fn send_raw(
        &self,
        envelope_from: Option<&str>,
        message: &[u8],
    ) -> Result<Self::Ok, Self::Error>;
}

/// tokio 1.x based transport method for mails
#[cfg(feature = "tokio1")]
#[cfg_attr(docsrs, doc(cfg(feature = "tokio1")))]
#[async_trait]
pub trait AsyncTransport {
    /// Response produced by the transport
    type Ok;
    /// Error produced by the transport
    type Error: From<Error>;

    /// Validates and renders the mail, then hands it to the transport
    async fn send(&self, mail: &Mail) -> Result<Self::Ok, Self::Error> {
        let raw = mail.formatted()?;
        self.send_raw(mail.envelope_from(), raw.as_bytes()).await
    }

    /// Delivers an already-rendered message
    async fn send_raw(
        &self,
        envelope_from: Option<&str>,
        message: &[u8],
    ) -> Result<Self::Ok, Self::Error>;
}
