//! Session cookies
//!
//! [`establish_session`] and [`clear_session`] ask a [`SessionAuthenticator`]
//! for a cookie and write it into a [`CookieSink`]. [`JwtSessionAuthenticator`]
//! is the authenticator used by the HTTP service.

mod cookie;
mod jwt;
mod session;
mod types;

pub use cookie::build_cookie;
pub use jwt::{JwtSessionAuthenticator, SessionClaims, SessionConfig, SessionError};
pub use session::{clear_session, establish_session, CookieSink, SessionAuthenticator, SESSION_COOKIE_PATH};
pub use types::{CookieAttributes, SameSite, Session, SessionAttributes, SessionCookie};
