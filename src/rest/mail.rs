use axum::{
  extract::{Json, State},
  http::StatusCode,
  response::Json as JsonResponse,
  routing::{post, Router},
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use super::session::require_session;
use crate::{email::compose_message, error::AppError, state::SharedAppState};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SendMailRequest {
  pub from: String,
  pub to: String,
  pub subject: String,
  pub html: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SendMailResponse {
  pub code: String,
  pub message: Vec<String>,
}

pub fn mail_routes() -> Router<SharedAppState> {
  Router::new().route("/mail", post(send_mail_handler))
}

pub async fn send_mail_handler(
  State(state): State<SharedAppState>,
  jar: CookieJar,
  Json(payload): Json<SendMailRequest>,
) -> Result<(StatusCode, JsonResponse<SendMailResponse>), AppError> {
  let session = require_session(&state, &jar)?;
  tracing::debug!(user_id = %session.user_id, "sending mail");

  let message = compose_message(&payload.from, &payload.to, &payload.subject, &payload.html);
  let response = state.mailer.send_mail(&message).await?;

  Ok((
    StatusCode::ACCEPTED,
    JsonResponse(SendMailResponse {
      code: response.code().to_string(),
      message: response.message().map(str::to_string).collect(),
    }),
  ))
}
