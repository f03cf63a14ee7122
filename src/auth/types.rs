use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Extra data stored alongside a session when it is created.
pub type SessionAttributes = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
  pub id: String,
  pub user_id: String,
  pub expires_at: DateTime<Utc>,
  pub fresh: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SameSite {
  Strict,
  Lax,
  None,
}

/// Cookie options as supplied by the authentication library. `None` leaves the attribute unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieAttributes {
  pub path: Option<String>,
  pub domain: Option<String>,
  /// Seconds.
  pub max_age: Option<i64>,
  pub expires: Option<DateTime<Utc>>,
  pub http_only: Option<bool>,
  pub secure: Option<bool>,
  pub same_site: Option<SameSite>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCookie {
  pub name: String,
  pub value: String,
  pub attributes: CookieAttributes,
}
