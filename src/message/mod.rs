//! Provides a way to build mail sending requests and render them for the
//! mail transfer agent
//!
//! ## Usage
//!
//! ```rust
//! use courrier::Mail;
//!
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! let mail = Mail::builder()
//!     .from("nobody@domain.tld")
//!     .to("hei@domain.tld")
//!     .subject("Happy new year")
//!     .body("Be happy!")
//!     .build();
//!
//! let raw = mail.formatted()?;
//! assert!(raw.starts_with("To: hei@domain.tld\n"));
//! # Ok(())
//! # }
//! ```
//!
//! An HTML mail carries its markup Base64 encoded inside a
//! `multipart/alternative` body, with an optional plain text fallback:
//!
//! ```rust
//! use courrier::{BodyType, Mail};
//!
//! let mail = Mail::builder()
//!     .from("nobody@domain.tld")
//!     .to("hei@domain.tld")
//!     .subject("Happy new year")
//!     .body("<p>Be happy!</p>")
//!     .body_type(BodyType::Html)
//!     .plaintext("Be happy!")
//!     .build();
//! ```

mod base64;
mod boundary;

use email_address::EmailAddress;

use crate::error::Error;

/// One or more recipient addresses.
///
/// A single address and a one-element list render identically. A longer list
/// renders one address per line: the header line carries the first address
/// with a trailing comma, continuation lines are indented with a single
/// space, and only the last one drops the comma.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipients {
    /// A single address
    One(String),
    /// An ordered list of addresses
    Many(Vec<String>),
}

impl Recipients {
    /// Iterates over the addresses in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        match self {
            Recipients::One(address) => std::slice::from_ref(address).iter(),
            Recipients::Many(addresses) => addresses.iter(),
        }
        .map(String::as_str)
    }

    /// Whether there is no address at all: an empty list, or a single empty
    /// string
    pub fn is_empty(&self) -> bool {
        match self {
            Recipients::One(address) => address.is_empty(),
            Recipients::Many(addresses) => addresses.is_empty(),
        }
    }
}

impl From<&str> for Recipients {
    fn from(address: &str) -> Self {
        Recipients::One(address.into())
    }
}

impl From<String> for Recipients {
    fn from(address: String) -> Self {
        Recipients::One(address)
    }
}

impl From<Vec<String>> for Recipients {
    fn from(addresses: Vec<String>) -> Self {
        Recipients::Many(addresses)
    }
}

impl From<Vec<&str>> for Recipients {
    fn from(addresses: Vec<&str>) -> Self {
        Recipients::Many(addresses.into_iter().map(Into::into).collect())
    }
}

/// Interpretation of the primary body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyType {
    /// The body is sent verbatim as plain text
    #[default]
    Plain,
    /// The body is HTML markup, sent Base64 encoded inside a
    /// `multipart/alternative` message
    Html,
}

impl From<&str> for BodyType {
    /// `"html"`, compared case-insensitively, selects [`BodyType::Html`];
    /// everything else selects [`BodyType::Plain`]
    fn from(value: &str) -> Self {
        if value.eq_ignore_ascii_case("html") {
            BodyType::Html
        } else {
            BodyType::Plain
        }
    }
}

/// A mail sending request
///
/// A `Mail` is consumed in a single delivery: it is validated, rendered once
/// with [`Mail::formatted`] and piped to the transfer agent. Nothing is
/// retained between deliveries.
#[derive(Debug, Clone, Default)]
pub struct Mail {
    from: Option<String>,
    to: Option<Recipients>,
    cc: Option<Recipients>,
    bcc: Option<Recipients>,
    subject: Option<String>,
    body: Option<String>,
    body_type: BodyType,
    plaintext: Option<String>,
    reply_to: Option<String>,
    envelope_from: Option<String>,
}

impl Mail {
    /// Creates a new mail builder without any field set
    pub fn builder() -> MailBuilder {
        MailBuilder::new()
    }

    /// The envelope sender to hand to the transfer agent, if one was supplied
    pub fn envelope_from(&self) -> Option<&str> {
        self.envelope_from.as_deref().filter(|s| !s.is_empty())
    }

    /// Checks the request against the required-field and address-syntax
    /// rules, reporting the first violation.
    ///
    /// The precedence order is: missing `from`, invalid `from`, missing `to`,
    /// invalid `to`, invalid `cc`, invalid `bcc`, missing subject, missing
    /// body, invalid envelope sender. A field counts as missing when it is
    /// absent, an empty string, or an empty list.
    pub fn validate(&self) -> Result<(), Error> {
        let from = match self.from.as_deref() {
            Some(from) if !from.is_empty() => from,
            _ => return Err(Error::MissingFrom),
        };
        if !valid_address(from) {
            return Err(Error::InvalidFrom);
        }

        match &self.to {
            Some(to) if !to.is_empty() => {
                if !to.iter().all(valid_address) {
                    return Err(Error::InvalidTo);
                }
            }
            _ => return Err(Error::MissingTo),
        }
        if let Some(cc) = &self.cc {
            if !cc.is_empty() && !cc.iter().all(valid_address) {
                return Err(Error::InvalidCc);
            }
        }
        if let Some(bcc) = &self.bcc {
            if !bcc.is_empty() && !bcc.iter().all(valid_address) {
                return Err(Error::InvalidBcc);
            }
        }

        match self.subject.as_deref() {
            Some(subject) if !subject.is_empty() => {}
            _ => return Err(Error::MissingSubject),
        }
        match self.body.as_deref() {
            Some(body) if !body.is_empty() => {}
            _ => return Err(Error::MissingBody),
        }

        if let Some(envelope_from) = self.envelope_from() {
            if !valid_address(envelope_from) {
                return Err(Error::InvalidEnvelopeFrom);
            }
        }
        Ok(())
    }

    /// Validates the request and renders the full message, headers and body,
    /// as newline-joined text ready to be piped to the transfer agent
    pub fn formatted(&self) -> Result<String, Error> {
        self.formatted_with_rng(&mut fastrand::Rng::new())
    }

    /// Like [`formatted`](Self::formatted), with the randomness source for
    /// boundary generation supplied by the caller. A seeded rng makes the
    /// rendition fully deterministic.
    pub(crate) fn formatted_with_rng(&self, rng: &mut fastrand::Rng) -> Result<String, Error> {
        self.validate()?;
        Ok(self.compose(rng))
    }

    // Callers go through `formatted`; a request that failed validation would
    // render missing fields as empty text.
    fn compose(&self, rng: &mut fastrand::Rng) -> String {
        let from = self.from.as_deref().unwrap_or_default();
        let mut lines: Vec<String> = Vec::new();

        if let Some(to) = &self.to {
            push_address_lines(&mut lines, "To", to);
        }
        if let Some(cc) = &self.cc {
            push_address_lines(&mut lines, "CC", cc);
        }
        if let Some(bcc) = &self.bcc {
            push_address_lines(&mut lines, "BCC", bcc);
        }
        lines.push(format!("From: {}", from));
        let reply_to = self.reply_to.as_deref().filter(|r| !r.is_empty());
        lines.push(format!("Reply-To: {}", reply_to.unwrap_or(from)));
        lines.push(format!(
            "Subject: {}",
            self.subject.as_deref().unwrap_or_default()
        ));

        let body = self.body.as_deref().unwrap_or_default();
        match self.body_type {
            BodyType::Html => self.push_alternative_body(&mut lines, body, rng),
            BodyType::Plain => {
                lines.push(String::new());
                lines.push(body.into());
                lines.push(String::new());
            }
        }
        lines.join("\n")
    }

    fn push_alternative_body(&self, lines: &mut Vec<String>, body: &str, rng: &mut fastrand::Rng) {
        let plaintext = self.plaintext.as_deref().filter(|p| !p.is_empty());
        let boundary = boundary::generate(plaintext, rng);

        lines.push("Mime-Version: 1.0".into());
        lines.push(format!(
            "Content-Type: multipart/alternative; boundary={}",
            boundary
        ));
        lines.push("Content-Disposition: inline".into());
        lines.push(String::new());
        lines.push(format!("--{}", boundary));
        lines.push("Content-Type: text/html; charset=utf-8".into());
        lines.push("Content-Transfer-Encoding: Base64".into());
        lines.push("Content-Disposition: inline".into());
        lines.push(String::new());
        lines.push(base64::encode_wrapped(body));
        lines.push(String::new());

        if let Some(plaintext) = plaintext {
            lines.push(format!("--{}", boundary));
            lines.push("Content-Type: text/plain; charset=utf-8".into());
            lines.push("Content-Disposition: inline".into());
            lines.push(String::new());
            lines.push(plaintext.into());
            lines.push(String::new());
        }

        lines.push(format!("--{}--", boundary));
    }
}

fn valid_address(address: &str) -> bool {
    address.parse::<EmailAddress>().is_ok()
}

fn push_address_lines(lines: &mut Vec<String>, header: &str, recipients: &Recipients) {
    match recipients {
        Recipients::One(address) if !address.is_empty() => {
            lines.push(format!("{}: {}", header, address));
        }
        Recipients::One(_) => {}
        Recipients::Many(addresses) => match addresses.as_slice() {
            [] => {}
            [address] => lines.push(format!("{}: {}", header, address)),
            [first, middle @ .., last] => {
                lines.push(format!("{}: {},", header, first));
                for address in middle {
                    lines.push(format!(" {},", address));
                }
                lines.push(format!(" {}", last));
            }
        },
    }
}

/// A builder for [`Mail`]
#[derive(Debug, Clone, Default)]
pub struct MailBuilder {
    mail: Mail,
}

impl MailBuilder {
    /// Creates a new builder without any field set
    pub fn new() -> Self {
        MailBuilder {
            mail: Mail::default(),
        }
    }

    /// Sets the `From` header address
    pub fn from<S: Into<String>>(mut self, from: S) -> Self {
        self.mail.from = Some(from.into());
        self
    }

    /// Sets the `To` header address or address list
    pub fn to<R: Into<Recipients>>(mut self, to: R) -> Self {
        self.mail.to = Some(to.into());
        self
    }

    /// Sets the `CC` header address or address list
    pub fn cc<R: Into<Recipients>>(mut self, cc: R) -> Self {
        self.mail.cc = Some(cc.into());
        self
    }

    /// Sets the `BCC` header address or address list
    pub fn bcc<R: Into<Recipients>>(mut self, bcc: R) -> Self {
        self.mail.bcc = Some(bcc.into());
        self
    }

    /// Sets the `Subject` header
    pub fn subject<S: Into<String>>(mut self, subject: S) -> Self {
        self.mail.subject = Some(subject.into());
        self
    }

    /// Sets the primary body, HTML markup or plain text depending on
    /// [`body_type`](Self::body_type)
    pub fn body<S: Into<String>>(mut self, body: S) -> Self {
        self.mail.body = Some(body.into());
        self
    }

    /// Sets how the primary body is interpreted, plain text by default
    pub fn body_type<B: Into<BodyType>>(mut self, body_type: B) -> Self {
        self.mail.body_type = body_type.into();
        self
    }

    /// Sets the plain text alternative, included only for an HTML body
    pub fn plaintext<S: Into<String>>(mut self, plaintext: S) -> Self {
        self.mail.plaintext = Some(plaintext.into());
        self
    }

    /// Sets the `Reply-To` header address, the `From` address by default
    pub fn reply_to<S: Into<String>>(mut self, reply_to: S) -> Self {
        self.mail.reply_to = Some(reply_to.into());
        self
    }

    /// Sets the envelope sender passed to the transfer agent with `-f`,
    /// distinct from the `From` header
    pub fn envelope_from<S: Into<String>>(mut self, envelope_from: S) -> Self {
        self.mail.envelope_from = Some(envelope_from.into());
        self
    }

    /// Assembles the request. Validation happens on delivery, or explicitly
    /// through [`Mail::validate`].
    pub fn build(self) -> Mail {
        self.mail
    }
}
