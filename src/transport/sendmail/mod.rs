//! The sendmail transport sends the mail using the local sendmail command.
//!
//! The command is invoked with `-i -t`, so the recipients are read from the
//! message headers, plus `-f <address>` when the mail carries an envelope
//! sender. The rendered message is written to the command's standard input,
//! the stream is closed, and the outcome is decided by the exit status.
//!
//! ```rust,no_run
//! use courrier::{Mail, SendmailTransport, Transport};
//!
//! # fn main() -> Result<(), courrier::Error> {
//! let mail = Mail::builder()
//!     .from("nobody@domain.tld")
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

use std::{
    ffi::OsString,
    io::{self, Write},
    process::{Command, ExitStatus, Stdio},
};

use crate::{error::Error, transport::Transport};

#[cfg(feature = "tokio1")]
use async_trait::async_trait;

#[cfg(feature = "tokio1")]
use crate::transport::AsyncTransport;

/// Looked up through the process search path.
const DEFAULT_SENDMAIL: &str = "sendmail";

/// Sends mails through the `sendmail` command
#[derive(Debug, Clone)]
pub struct SendmailTransport {
    command: OsString,
}

impl SendmailTransport {
    /// Creates a new transport using the `sendmail` command found on the
    /// search path
    pub fn new() -> SendmailTransport {
        SendmailTransport {
            command: DEFAULT_SENDMAIL.into(),
        }
    }

    /// Creates a new transport using the given sendmail command
    pub fn new_with_command<S: Into<OsString>>(command: S) -> SendmailTransport {
        SendmailTransport {
            command: command.into(),
        }
    }

    fn command(&self, envelope_from: Option<&str>) -> Command {
        let mut c = Command::new(&self.command);
        c.arg("-i").arg("-t");
        if let Some(envelope_from) = envelope_from {
            c.arg("-f").arg(envelope_from);
        }
        c.stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        c
    }
}

impl Default for SendmailTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for SendmailTransport {
    type Ok = ();
    type Error = Error;

    fn send_raw(&self, envelope_from: Option<&str>, message: &[u8]) -> Result<(), Error> {
        let mut process = self
            .command(envelope_from)
            .spawn()
            .map_err(Error::Launch)?;

        let mut stdin = process
            .stdin
            .take()
            .ok_or_else(|| Error::Io(io::Error::other("sendmail stdin was not captured")))?;
        // A process that exits before draining its input surfaces as a
        // broken pipe here; the exit status decides the outcome then.
        if let Err(err) = stdin.write_all(message) {
            if err.kind() != io::ErrorKind::BrokenPipe {
                return Err(Error::Io(err));
            }
        }
        drop(stdin);

        #[cfg(feature = "tracing")]
        tracing::debug!("wrote {} bytes to sendmail", message.len());

        let status = process.wait().map_err(Error::Io)?;
        interpret_status(status)
    }
}

fn interpret_status(status: ExitStatus) -> Result<(), Error> {
    #[cfg(feature = "tracing")]
    tracing::debug!("sendmail exited with {}", status);

    match status.code() {
        Some(0) => Ok(()),
        Some(code) => Err(Error::ExitCode(code)),
        None => Err(Error::Terminated),
    }
}

/// Sends mails through the `sendmail` command, using tokio 1.x
#[cfg(feature = "tokio1")]
#[cfg_attr(docsrs, doc(cfg(feature = "tokio1")))]
#[derive(Debug, Clone)]
pub struct AsyncSendmailTransport {
    command: OsString,
}

#[cfg(feature = "tokio1")]
impl AsyncSendmailTransport {
    /// Creates a new transport using the `sendmail` command found on the
    /// search path
    pub fn new() -> AsyncSendmailTransport {
        AsyncSendmailTransport {
            command: DEFAULT_SENDMAIL.into(),
        }
    }

    /// Creates a new transport using the given sendmail command
    pub fn new_with_command<S: Into<OsString>>(command: S) -> AsyncSendmailTransport {
        AsyncSendmailTransport {
            command: command.into(),
        }
    }

    fn command(&self, envelope_from: Option<&str>) -> tokio1_crate::process::Command {
        let mut c = tokio1_crate::process::Command::new(&self.command);
        c.arg("-i").arg("-t");
        if let Some(envelope_from) = envelope_from {
            c.arg("-f").arg(envelope_from);
        }
        c.stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        c
    }
}

#[cfg(feature = "tokio1")]
impl Default for AsyncSendmailTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "tokio1")]
#[async_trait]
impl AsyncTransport for AsyncSendmailTransport {
    type Ok = ();
    type Error = Error;

    async fn send_raw(&self, envelope_from: Option<&str>, message: &[u8]) -> Result<(), Error> {
        use tokio1_crate::io::AsyncWriteExt;

        let mut process = self
            .command(envelope_from)
            .spawn()
            .map_err(Error::Launch)?;

        let mut stdin = process
            .stdin
            .take()
            .ok_or_else(|| Error::Io(io::Error::other("sendmail stdin was not captured")))?;
        if let Err(err) = stdin.write_all(message).await {
            if err.kind() != io::ErrorKind::BrokenPipe {
                return Err(Error::Io(err));
            }
        }
        drop(stdin);

        #[cfg(feature = "tracing")]
        tracing::debug!("wrote {} bytes to sendmail", message.len());

        let status = process.wait().await.map_err(Error::Io)?;
        interpret_status(status)
    }
}
