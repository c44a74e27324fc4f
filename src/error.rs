//! Error and result type for mail composition and delivery

use std::{
    error::Error as StdError,
    fmt::{self, Display, Formatter},
    io,
};

/// The errors that may occur when validating, composing or delivering a mail.
///
/// Validation errors are raised before the sendmail process is started, so a
/// request that fails validation has no observable side effect.
#[derive(Debug)]
pub enum Error {
    /// No `From` address was supplied
    MissingFrom,
    /// The `From` address is not a valid email address
    InvalidFrom,
    /// No `To` address was supplied, or the recipient list is empty
    MissingTo,
    /// A `To` address is not a valid email address
    InvalidTo,
    /// A `CC` address is not a valid email address
    InvalidCc,
    /// A `BCC` address is not a valid email address
    InvalidBcc,
    /// No subject was supplied
    MissingSubject,
    /// No body was supplied
    MissingBody,
    /// The envelope sender is not a valid email address
    InvalidEnvelopeFrom,
    /// The sendmail command could not be started
    Launch(io::Error),
    /// I/O with the running sendmail process failed
    Io(io::Error),
    /// The sendmail process was terminated before producing an exit code
    Terminated,
    /// The sendmail process exited with a non-zero code
    ExitCode(i32),
}

impl Display for Error {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Error::MissingFrom => fmt.write_str("missing from address"),
            Error::InvalidFrom => fmt.write_str("invalid from address"),
            Error::MissingTo => fmt.write_str("missing to address"),
            Error::InvalidTo => fmt.write_str("invalid to address"),
            Error::InvalidCc => fmt.write_str("invalid cc address"),
            Error::InvalidBcc => fmt.write_str("invalid bcc address"),
            Error::MissingSubject => fmt.write_str("missing subject"),
            Error::MissingBody => fmt.write_str("missing body"),
            Error::InvalidEnvelopeFrom => fmt.write_str("invalid envelopeFrom address"),
            Error::Launch(err) => write!(fmt, "sendmail could not be started: {}", err),
            Error::Io(err) => write!(fmt, "sendmail i/o error: {}", err),
            Error::Terminated => fmt.write_str("sendmail was terminated by a signal"),
            Error::ExitCode(code) => write!(fmt, "sendmail exited with code: {}", code),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Launch(err) | Error::Io(err) => Some(err),
            _ => None,
        }
    }
}
