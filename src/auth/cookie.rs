use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite as CookieSameSite};
use time::{Duration, OffsetDateTime};

use super::{
  session::CookieSink,
  types::{CookieAttributes, SameSite},
};

impl From<SameSite> for CookieSameSite {
  fn from(same_site: SameSite) -> Self {
    match same_site {
      SameSite::Strict => CookieSameSite::Strict,
      SameSite::Lax => CookieSameSite::Lax,
      SameSite::None => CookieSameSite::None,
    }
  }
}

/// Turns a name, value and library attributes into a `Set-Cookie` ready cookie.
pub fn build_cookie(name: &str, value: &str, options: CookieAttributes) -> Cookie<'static> {
  let mut builder = Cookie::build((name.to_string(), value.to_string()));

  if let Some(path) = options.path {
    builder = builder.path(path);
  }
  if let Some(domain) = options.domain {
    builder = builder.domain(domain);
  }
  if let Some(max_age) = options.max_age {
    builder = builder.max_age(Duration::seconds(max_age));
  }
  if let Some(expires) = options.expires {
    match OffsetDateTime::from_unix_timestamp(expires.timestamp()) {
      Ok(expires) => builder = builder.expires(expires),
      Err(err) => tracing::warn!("Dropping out of range cookie expiry: {}", err),
    }
  }
  if let Some(http_only) = options.http_only {
    builder = builder.http_only(http_only);
  }
  if let Some(secure) = options.secure {
    builder = builder.secure(secure);
  }
  if let Some(same_site) = options.same_site {
    builder = builder.same_site(same_site.into());
  }

  builder.build()
}

impl CookieSink for CookieJar {
  fn set(&mut self, name: &str, value: &str, options: CookieAttributes) {
    let jar = std::mem::replace(self, CookieJar::new());
    *self = jar.add(build_cookie(name, value, options));
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_build_cookie_maps_every_attribute() {
    let options = CookieAttributes {
      path: Some(".".to_string()),
      domain: Some("example.com".to_string()),
      max_age: Some(60),
      expires: None,
      http_only: Some(true),
      secure: Some(true),
      same_site: Some(SameSite::Strict),
    };

    let cookie = build_cookie("auth_session", "abc", options);

    assert_eq!(cookie.name(), "auth_session");
    assert_eq!(cookie.value(), "abc");
    assert_eq!(cookie.path(), Some("."));
    assert_eq!(cookie.domain(), Some("example.com"));
    assert_eq!(cookie.max_age(), Some(Duration::seconds(60)));
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.same_site(), Some(CookieSameSite::Strict));
  }

  #[test]
  fn test_build_cookie_leaves_unset_attributes_out() {
    let cookie = build_cookie("sid", "", CookieAttributes::default());

    assert_eq!(cookie.to_string(), "sid=");
  }

  #[test]
  fn test_cookie_jar_sink_replaces_existing_cookie() {
    let mut jar = CookieJar::new();

    jar.set("auth_session", "first", CookieAttributes::default());
    jar.set("auth_session", "second", CookieAttributes::default());

    assert_eq!(jar.get("auth_session").map(|c| c.value()), Some("second"));
  }
}
