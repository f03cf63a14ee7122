use std::error::Error;

/// Errors raised by lettre while building or sending a message, passed through untouched.
#[derive(Debug)]
pub enum MailError {
  Address(lettre::address::AddressError),
  Message(lettre::error::Error),
  Transport(lettre::transport::smtp::Error),
}

impl Error for MailError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      MailError::Address(err) => err.source(),
      MailError::Message(err) => err.source(),
      MailError::Transport(err) => err.source(),
    }
  }
}

impl std::fmt::Display for MailError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      MailError::Address(err) => err.fmt(f),
      MailError::Message(err) => err.fmt(f),
      MailError::Transport(err) => err.fmt(f),
    }
  }
}

impl From<lettre::address::AddressError> for MailError {
  fn from(err: lettre::address::AddressError) -> Self {
    MailError::Address(err)
  }
}

impl From<lettre::error::Error> for MailError {
  fn from(err: lettre::error::Error) -> Self {
    MailError::Message(err)
  }
}

impl From<lettre::transport::smtp::Error> for MailError {
  fn from(err: lettre::transport::smtp::Error) -> Self {
    MailError::Transport(err)
  }
}
