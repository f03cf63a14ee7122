use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::error::Error;
use uuid::Uuid;

use super::{
  session::SessionAuthenticator,
  types::{CookieAttributes, SameSite, Session, SessionAttributes, SessionCookie},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
  pub secret: String,
  pub cookie_name: String,
  pub ttl_hours: i64,
  pub secure_cookie: bool,
}

impl Default for SessionConfig {
  fn default() -> Self {
    SessionConfig {
      secret: "".to_string(),
      cookie_name: "auth_session".to_string(),
      ttl_hours: 24 * 30,
      secure_cookie: true,
    }
  }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
  pub sub: String,
  pub sid: String,
  pub iat: i64,
  pub exp: i64,
  #[serde(flatten)]
  pub attributes: SessionAttributes,
}

#[derive(Debug)]
pub enum SessionError {
  InvalidUserId(String),
  InvalidTtl(i64),
  Token(jsonwebtoken::errors::Error),
}

impl Error for SessionError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      SessionError::InvalidUserId(_) | SessionError::InvalidTtl(_) => None,
      SessionError::Token(err) => Some(err),
    }
  }
}

impl std::fmt::Display for SessionError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      SessionError::InvalidUserId(id) => write!(f, "Invalid user id: {:?}", id),
      SessionError::InvalidTtl(hours) => write!(f, "Invalid session ttl: {} hours", hours),
      SessionError::Token(err) => write!(f, "Session token error: {}", err),
    }
  }
}

impl From<jsonwebtoken::errors::Error> for SessionError {
  fn from(err: jsonwebtoken::errors::Error) -> Self {
    SessionError::Token(err)
  }
}

/// Stateless sessions: the session id is a signed JWT naming the user.
pub struct JwtSessionAuthenticator {
  config: SessionConfig,
  encoding_key: EncodingKey,
  decoding_key: DecodingKey,
}

impl JwtSessionAuthenticator {
  pub fn new(config: SessionConfig) -> Self {
    let encoding_key = EncodingKey::from_secret(config.secret.as_ref());
    let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

    Self {
      config,
      encoding_key,
      decoding_key,
    }
  }

  pub fn cookie_name(&self) -> &str {
    &self.config.cookie_name
  }

  /// Verifies a session id and returns the session it names.
  pub fn validate_session(&self, session_id: &str) -> Result<Session, SessionError> {
    let token_data = decode::<SessionClaims>(session_id, &self.decoding_key, &Validation::default())?;
    let claims = token_data.claims;

    Ok(Session {
      id: session_id.to_string(),
      user_id: claims.sub,
      expires_at: timestamp(claims.exp),
      fresh: false,
    })
  }

  fn ttl(&self) -> Option<TimeDelta> {
    if self.config.ttl_hours <= 0 {
      return None;
    }
    TimeDelta::try_hours(self.config.ttl_hours)
  }

  fn base_attributes(&self) -> CookieAttributes {
    CookieAttributes {
      path: Some("/".to_string()),
      http_only: Some(true),
      secure: Some(self.config.secure_cookie),
      same_site: Some(SameSite::Lax),
      ..CookieAttributes::default()
    }
  }
}

fn timestamp(seconds: i64) -> DateTime<Utc> {
  DateTime::from_timestamp(seconds, 0).unwrap_or(DateTime::<Utc>::MAX_UTC)
}

#[async_trait]
impl SessionAuthenticator for JwtSessionAuthenticator {
  type Error = SessionError;

  async fn create_session(&self, user_id: &str, attributes: SessionAttributes) -> Result<Session, SessionError> {
    if user_id.trim().is_empty() {
      return Err(SessionError::InvalidUserId(user_id.to_string()));
    }

    let issued_at = Utc::now();
    let expires_at = self
      .ttl()
      .and_then(|ttl| issued_at.checked_add_signed(ttl))
      .ok_or(SessionError::InvalidTtl(self.config.ttl_hours))?;

    let claims = SessionClaims {
      sub: user_id.to_string(),
      sid: Uuid::new_v4().to_string(),
      iat: issued_at.timestamp(),
      exp: expires_at.timestamp(),
      attributes,
    };

    let id = encode(&Header::default(), &claims, &self.encoding_key)?;

    tracing::info!(user_id, session = %claims.sid, "session created");

    Ok(Session {
      id,
      user_id: claims.sub,
      expires_at: timestamp(claims.exp),
      fresh: true,
    })
  }

  fn create_session_cookie(&self, session_id: &str) -> SessionCookie {
    SessionCookie {
      name: self.config.cookie_name.clone(),
      value: session_id.to_string(),
      attributes: CookieAttributes {
        max_age: self.ttl().map(|ttl| ttl.num_seconds()),
        ..self.base_attributes()
      },
    }
  }

  fn create_blank_session_cookie(&self) -> SessionCookie {
    SessionCookie {
      name: self.config.cookie_name.clone(),
      value: "".to_string(),
      attributes: CookieAttributes {
        max_age: Some(0),
        ..self.base_attributes()
      },
    }
  }
}
