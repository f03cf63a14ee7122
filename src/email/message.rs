use lettre::message::{
  header::{ContentType, To},
  Mailbox, Mailboxes,
};
use lettre::Message;

use super::{error::MailError, types::MailMessage};

/// Builds a [`MailMessage`] from its four parts, verbatim.
pub fn compose_message(from: &str, to: &str, subject: &str, html: &str) -> MailMessage {
  MailMessage {
    from: from.to_string(),
    to: to.to_string(),
    subject: subject.to_string(),
    html: html.to_string(),
  }
}

impl TryFrom<&MailMessage> for Message {
  type Error = MailError;

  fn try_from(message: &MailMessage) -> Result<Self, Self::Error> {
    let from: Mailbox = message.from.parse()?;
    // `to` may be a comma separated list of mailboxes
    let to: Mailboxes = message.to.parse()?;

    let email = Message::builder()
      .from(from)
      .mailbox(To::from(to))
      .subject(&message.subject)
      .header(ContentType::TEXT_HTML)
      .body(message.html.clone())?;

    Ok(email)
  }
}
