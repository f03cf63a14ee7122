use std::sync::Arc;

use crate::{
  auth::JwtSessionAuthenticator,
  config::AppConfig,
  email::{create_transport, SmtpMailer, SmtpTransportFactory},
};

#[derive(Clone)]
pub struct SharedAppState {
  pub authenticator: Arc<JwtSessionAuthenticator>,
  pub mailer: Arc<SmtpMailer>,
}

impl SharedAppState {
  pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
    let mailer = create_transport(&SmtpTransportFactory, &config.smtp)?;
    let authenticator = JwtSessionAuthenticator::new(config.session.clone());

    Ok(Self {
      authenticator: Arc::new(authenticator),
      mailer: Arc::new(mailer),
    })
  }
}
