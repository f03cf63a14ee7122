use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub secure: bool,
  pub service: Option<String>,
  pub username: String,
  pub password: String,
}

impl Default for SmtpConfig {
  fn default() -> Self {
    SmtpConfig {
      host: "smtp.gmail.com".to_string(),
      port: 587,
      secure: false,
      service: None,
      username: "".to_string(),
      password: "".to_string(),
    }
  }
}

/// Credentials nested under `auth` in [`TransportOptions`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmtpAuth {
  pub user: String,
  pub pass: String,
}

/// Configuration handed verbatim to a [`TransportFactory`](super::TransportFactory).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportOptions {
  pub host: String,
  pub port: u16,
  pub secure: bool,
  pub service: Option<String>,
  pub auth: SmtpAuth,
}

impl From<&SmtpConfig> for TransportOptions {
  fn from(config: &SmtpConfig) -> Self {
    TransportOptions {
      host: config.host.clone(),
      port: config.port,
      secure: config.secure,
      service: config.service.clone(),
      auth: SmtpAuth {
        user: config.username.clone(),
        pass: config.password.clone(),
      },
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailMessage {
  pub from: String,
  pub to: String,
  pub subject: String,
  pub html: String,
}
