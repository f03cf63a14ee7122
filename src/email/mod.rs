//! Email composition and delivery
//!
//! This module shapes message and connection data into what lettre expects:
//! [`compose_message`] builds the message record, [`create_transport`] turns
//! SMTP settings into a transport through a [`TransportFactory`].

mod error;
mod message;
mod transport;
mod types;

pub use error::MailError;
pub use message::compose_message;
pub use transport::{create_transport, well_known_service, Endpoint, SmtpMailer, SmtpTransportFactory, TransportFactory};
pub use types::{MailMessage, SmtpAuth, SmtpConfig, TransportOptions};
