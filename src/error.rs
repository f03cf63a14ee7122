use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

use crate::{auth::SessionError, email::MailError};

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn unauthorized(message: impl Into<String>) -> Self {
    Self::new(StatusCode::UNAUTHORIZED, message)
  }

  pub fn bad_gateway(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_GATEWAY, message)
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = Json(json!({
      "error": self.message,
      "status_code": self.status_code.as_u16(),
    }));

    (self.status_code, body).into_response()
  }
}

impl From<AppError> for StatusCode {
  fn from(err: AppError) -> Self {
    err.status_code
  }
}

impl From<SessionError> for AppError {
  fn from(error: SessionError) -> Self {
    match error {
      SessionError::InvalidUserId(_) => AppError::bad_request(error.to_string()),
      SessionError::InvalidTtl(_) => {
        tracing::error!("{}", error);
        AppError::internal_server_error("Session could not be created")
      }
      SessionError::Token(err) => {
        tracing::debug!("Rejected session token: {:?}", err);
        AppError::unauthorized("Invalid session")
      }
    }
  }
}

impl From<MailError> for AppError {
  fn from(error: MailError) -> Self {
    match error {
      MailError::Address(_) | MailError::Message(_) => AppError::bad_request(error.to_string()),
      MailError::Transport(err) => {
        tracing::error!("SMTP error: {:?}", err);
        AppError::bad_gateway("Mail relay rejected the message")
      }
    }
  }
}
