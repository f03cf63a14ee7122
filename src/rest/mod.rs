pub mod mail;
pub mod session;

pub use mail::mail_routes;
pub use session::session_routes;
