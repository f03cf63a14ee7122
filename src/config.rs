use std::{env, str::FromStr};

use anyhow::{anyhow, Context, Result};

use crate::{auth::SessionConfig, email::SmtpConfig};

/// Ten years.
pub const MAX_SESSION_TTL_HOURS: i64 = 24 * 365 * 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
  pub bind_address: String,
  pub smtp: SmtpConfig,
  pub session: SessionConfig,
}

impl AppConfig {
  /// Reads the configuration from the process environment.
  pub fn from_env() -> Result<Self> {
    Ok(AppConfig {
      bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8000".to_string()),
      smtp: smtp_config_from_env()?,
      session: session_config_from_env()?,
    })
  }
}

pub fn smtp_config_from_env() -> Result<SmtpConfig> {
  let defaults = SmtpConfig::default();

  Ok(SmtpConfig {
    host: env::var("SMTP_HOST").unwrap_or(defaults.host),
    port: parse_var("SMTP_PORT", defaults.port)?,
    secure: bool_var("SMTP_SECURE", defaults.secure)?,
    service: env::var("SMTP_SERVICE").ok().filter(|service| !service.is_empty()),
    username: required_var("SMTP_USERNAME")?,
    password: required_var("SMTP_PASSWORD")?,
  })
}

pub fn session_config_from_env() -> Result<SessionConfig> {
  let defaults = SessionConfig::default();

  Ok(SessionConfig {
    secret: required_var("JWT_SECRET")?,
    cookie_name: env::var("SESSION_COOKIE_NAME").unwrap_or(defaults.cookie_name),
    ttl_hours: session_ttl_from_env(defaults.ttl_hours)?,
    secure_cookie: bool_var("SESSION_COOKIE_SECURE", defaults.secure_cookie)?,
  })
}

fn session_ttl_from_env(default: i64) -> Result<i64> {
  let ttl_hours = parse_var("SESSION_TTL_HOURS", default)?;
  if !(1..=MAX_SESSION_TTL_HOURS).contains(&ttl_hours) {
    return Err(anyhow!(
      "SESSION_TTL_HOURS must be between 1 and {}, got {}",
      MAX_SESSION_TTL_HOURS,
      ttl_hours
    ));
  }
  Ok(ttl_hours)
}

fn required_var(name: &str) -> Result<String> {
  env::var(name).with_context(|| format!("{} environment variable must be set.", name))
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
  T: FromStr,
  T::Err: std::error::Error + Send + Sync + 'static,
{
  match env::var(name) {
    Ok(value) => value
      .parse()
      .with_context(|| format!("{} has an invalid value: {:?}", name, value)),
    Err(_) => Ok(default),
  }
}

fn bool_var(name: &str, default: bool) -> Result<bool> {
  match env::var(name) {
    Ok(value) => match value.to_ascii_lowercase().as_str() {
      "1" | "true" | "yes" | "on" => Ok(true),
      "0" | "false" | "no" | "off" => Ok(false),
      _ => Err(anyhow!("{} has an invalid boolean value: {:?}", name, value)),
    },
    Err(_) => Ok(default),
  }
}
