use async_trait::async_trait;

use super::types::{CookieAttributes, Session, SessionAttributes, SessionCookie};

/// Path written on every session cookie, whatever the authentication library asks for.
pub const SESSION_COOKIE_PATH: &str = ".";

/// The operations this crate needs from a session authentication library.
#[async_trait]
pub trait SessionAuthenticator: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  async fn create_session(&self, user_id: &str, attributes: SessionAttributes) -> Result<Session, Self::Error>;
  fn create_session_cookie(&self, session_id: &str) -> SessionCookie;
  fn create_blank_session_cookie(&self) -> SessionCookie;
}

/// Response-side cookie store.
pub trait CookieSink {
  fn set(&mut self, name: &str, value: &str, options: CookieAttributes);
}

/// Creates a session for `user_id` and writes its cookie into `cookies`.
///
/// An error from `create_session` is returned as-is and nothing is written.
pub async fn establish_session<A, S>(auth: &A, user_id: &str, cookies: &mut S) -> Result<Session, A::Error>
where
  A: SessionAuthenticator + ?Sized,
  S: CookieSink + ?Sized,
{
  let session = auth.create_session(user_id, SessionAttributes::new()).await?;
  let cookie = auth.create_session_cookie(&session.id);
  write_cookie(cookies, cookie);

  tracing::debug!(user_id, "session cookie issued");

  Ok(session)
}

/// Overwrites the session cookie with the library's blank cookie.
pub fn clear_session<A, S>(auth: &A, cookies: &mut S)
where
  A: SessionAuthenticator + ?Sized,
  S: CookieSink + ?Sized,
{
  let cookie = auth.create_blank_session_cookie();
  write_cookie(cookies, cookie);

  tracing::debug!("session cookie cleared");
}

fn write_cookie<S>(cookies: &mut S, cookie: SessionCookie)
where
  S: CookieSink + ?Sized,
{
  let options = CookieAttributes {
    path: Some(SESSION_COOKIE_PATH.to_string()),
    ..cookie.attributes
  };
  cookies.set(&cookie.name, &cookie.value, options);
}
