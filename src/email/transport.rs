//! SMTP transport construction

use lettre::{
  transport::smtp::{
    authentication::Credentials,
    client::{Tls, TlsParameters},
    response::Response,
  },
  AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use super::{
  error::MailError,
  types::{MailMessage, SmtpConfig, TransportOptions},
};

/// Something that turns [`TransportOptions`] into a send-capable transport.
pub trait TransportFactory {
  type Transport;
  type Error;

  fn create_transport(&self, options: TransportOptions) -> Result<Self::Transport, Self::Error>;
}

/// Reshapes the SMTP settings into [`TransportOptions`] and hands them to `factory`.
///
/// Nothing is validated here; a bad host or bad credentials only surface when
/// the returned transport is used to send.
pub fn create_transport<F>(factory: &F, config: &SmtpConfig) -> Result<F::Transport, F::Error>
where
  F: TransportFactory + ?Sized,
{
  let options = TransportOptions::from(config);
  tracing::debug!(
    host = %options.host,
    port = options.port,
    secure = options.secure,
    service = ?options.service,
    "creating mail transport"
  );
  factory.create_transport(options)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint<'a> {
  pub host: &'a str,
  pub port: u16,
  pub secure: bool,
}

const WELL_KNOWN_SERVICES: &[(&str, Endpoint<'static>)] = &[
  (
    "gmail",
    Endpoint {
      host: "smtp.gmail.com",
      port: 465,
      secure: true,
    },
  ),
  (
    "hotmail",
    Endpoint {
      host: "smtp-mail.outlook.com",
      port: 587,
      secure: false,
    },
  ),
  (
    "outlook365",
    Endpoint {
      host: "smtp.office365.com",
      port: 587,
      secure: false,
    },
  ),
  (
    "yahoo",
    Endpoint {
      host: "smtp.mail.yahoo.com",
      port: 465,
      secure: true,
    },
  ),
  (
    "sendgrid",
    Endpoint {
      host: "smtp.sendgrid.net",
      port: 587,
      secure: false,
    },
  ),
  (
    "mailgun",
    Endpoint {
      host: "smtp.mailgun.org",
      port: 465,
      secure: true,
    },
  ),
  (
    "zoho",
    Endpoint {
      host: "smtp.zoho.com",
      port: 465,
      secure: true,
    },
  ),
  (
    "icloud",
    Endpoint {
      host: "smtp.mail.me.com",
      port: 587,
      secure: false,
    },
  ),
];

/// Looks up a provider by name, ignoring case and punctuation ("Outlook 365" == "outlook365").
pub fn well_known_service(name: &str) -> Option<Endpoint<'static>> {
  let key: String = name
    .chars()
    .filter(|c| c.is_ascii_alphanumeric())
    .map(|c| c.to_ascii_lowercase())
    .collect();

  WELL_KNOWN_SERVICES
    .iter()
    .find(|(service, _)| *service == key)
    .map(|(_, endpoint)| *endpoint)
}

impl TransportOptions {
  /// The endpoint to connect to. A known `service` takes precedence over host, port and secure.
  pub fn endpoint(&self) -> Endpoint<'_> {
    match self.service.as_deref().and_then(well_known_service) {
      Some(endpoint) => endpoint,
      None => Endpoint {
        host: &self.host,
        port: self.port,
        secure: self.secure,
      },
    }
  }
}

/// Builds [`SmtpMailer`]s on top of lettre's async SMTP transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmtpTransportFactory;

impl TransportFactory for SmtpTransportFactory {
  type Transport = SmtpMailer;
  type Error = lettre::transport::smtp::Error;

  fn create_transport(&self, options: TransportOptions) -> Result<SmtpMailer, Self::Error> {
    let endpoint = options.endpoint();

    let mut builder = if endpoint.secure {
      AsyncSmtpTransport::<Tokio1Executor>::relay(endpoint.host)?
    } else {
      let tls = TlsParameters::new(endpoint.host.to_string())?;
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(endpoint.host).tls(Tls::Opportunistic(tls))
    };

    builder = builder.port(endpoint.port);

    if !options.auth.user.is_empty() {
      builder = builder.credentials(Credentials::new(options.auth.user, options.auth.pass));
    }

    Ok(SmtpMailer {
      transport: builder.build(),
    })
  }
}

pub struct SmtpMailer {
  transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
  pub async fn send_mail(&self, message: &MailMessage) -> Result<Response, MailError> {
    let email = Message::try_from(message)?;
    let response = self.transport.send(email).await?;

    tracing::info!(to = %message.to, code = %response.code(), "mail accepted by relay");

    Ok(response)
  }

  pub async fn test_connection(&self) -> Result<bool, MailError> {
    Ok(self.transport.test_connection().await?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::email::types::SmtpAuth;
  use mockall::predicate;

  mockall::mock! {
    Factory {}

    impl TransportFactory for Factory {
      type Transport = String;
      type Error = String;

      fn create_transport(&self, options: TransportOptions) -> Result<String, String>;
    }
  }

  fn smtp_config() -> SmtpConfig {
    SmtpConfig {
      host: "smtp.example.com".to_string(),
      port: 2525,
      secure: true,
      service: Some("custom".to_string()),
      username: "mailer".to_string(),
      password: "hunter2".to_string(),
    }
  }

  #[test]
  fn test_create_transport_passes_options_one_to_one() {
    let expected = TransportOptions {
      host: "smtp.example.com".to_string(),
      port: 2525,
      secure: true,
      service: Some("custom".to_string()),
      auth: SmtpAuth {
        user: "mailer".to_string(),
        pass: "hunter2".to_string(),
      },
    };

    let mut factory = MockFactory::new();
    factory
      .expect_create_transport()
      .with(predicate::eq(expected))
      .times(1)
      .returning(|_| Ok("transport".to_string()));

    let transport = create_transport(&factory, &smtp_config()).unwrap();
    assert_eq!(transport, "transport");
  }

  #[test]
  fn test_create_transport_propagates_factory_error() {
    let mut factory = MockFactory::new();
    factory
      .expect_create_transport()
      .times(1)
      .returning(|_| Err("boom".to_string()));

    let result = create_transport(&factory, &smtp_config());
    assert_eq!(result.unwrap_err(), "boom");
  }

  #[test]
  fn test_create_transport_options_serialize_with_nested_auth() {
    let options = TransportOptions::from(&smtp_config());
    let json = serde_json::to_value(&options).unwrap();

    assert_eq!(json["host"], "smtp.example.com");
    assert_eq!(json["port"], 2525);
    assert_eq!(json["secure"], true);
    assert_eq!(json["service"], "custom");
    assert_eq!(json["auth"]["user"], "mailer");
    assert_eq!(json["auth"]["pass"], "hunter2");
  }

  #[test]
  fn test_well_known_service_lookup_is_lenient() {
    let gmail = well_known_service("Gmail").unwrap();
    assert_eq!(gmail.host, "smtp.gmail.com");
    assert_eq!(gmail.port, 465);
    assert!(gmail.secure);

    let outlook = well_known_service("Outlook 365").unwrap();
    assert_eq!(outlook.host, "smtp.office365.com");
    assert!(!outlook.secure);

    assert!(well_known_service("unknown-provider").is_none());
  }

  #[test]
  fn test_endpoint_prefers_known_service() {
    let mut options = TransportOptions::from(&smtp_config());
    options.service = Some("sendgrid".to_string());

    let endpoint = options.endpoint();
    assert_eq!(endpoint.host, "smtp.sendgrid.net");
    assert_eq!(endpoint.port, 587);
    assert!(!endpoint.secure);
  }

  #[test]
  fn test_endpoint_falls_back_to_host() {
    let options = TransportOptions::from(&smtp_config());

    let endpoint = options.endpoint();
    assert_eq!(endpoint.host, "smtp.example.com");
    assert_eq!(endpoint.port, 2525);
    assert!(endpoint.secure);
  }

  #[tokio::test]
  async fn test_smtp_factory_builds_without_connecting() {
    let config = SmtpConfig {
      host: "localhost".to_string(),
      port: 1025,
      ..SmtpConfig::default()
    };

    let result = create_transport(&SmtpTransportFactory, &config);
    assert!(result.is_ok());
  }

  #[tokio::test]
  async fn test_smtp_factory_builds_implicit_tls_transport() {
    let config = SmtpConfig {
      host: "smtp.example.com".to_string(),
      port: 465,
      secure: true,
      username: "test_user".to_string(),
      password: "test_password".to_string(),
      ..SmtpConfig::default()
    };

    let result = create_transport(&SmtpTransportFactory, &config);
    assert!(result.is_ok());
  }

  #[tokio::test]
  async fn test_connection_reports_unreachable_relay() {
    let config = SmtpConfig {
      host: "127.0.0.1".to_string(),
      port: 1,
      ..SmtpConfig::default()
    };
    let mailer = create_transport(&SmtpTransportFactory, &config).unwrap();

    let result = mailer.test_connection().await;
    assert!(matches!(result, Err(MailError::Transport(_))));
  }

  #[tokio::test]
  async fn test_send_mail_rejects_invalid_recipient_before_connecting() {
    let config = SmtpConfig {
      host: "localhost".to_string(),
      port: 1025,
      ..SmtpConfig::default()
    };
    let mailer = create_transport(&SmtpTransportFactory, &config).unwrap();
    let message = crate::email::compose_message("a@x.com", "not an address", "Hi", "<p>hi</p>");

    let result = mailer.send_mail(&message).await;
    assert!(matches!(result, Err(MailError::Address(_))));
  }
}
