use axum::{
  extract::{Json, State},
  http::StatusCode,
  response::Json as JsonResponse,
  routing::{post, Router},
};
use axum_extra::extract::cookie::CookieJar;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  auth::{clear_session, establish_session, Session},
  error::AppError,
  state::SharedAppState,
};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateSessionRequest {
  pub user_id: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionResponse {
  pub user_id: String,
  pub expires_at: DateTime<Utc>,
  pub fresh: bool,
}

impl From<Session> for SessionResponse {
  fn from(session: Session) -> Self {
    SessionResponse {
      user_id: session.user_id,
      expires_at: session.expires_at,
      fresh: session.fresh,
    }
  }
}

pub fn session_routes() -> Router<SharedAppState> {
  Router::new().route(
    "/session",
    post(create_session_handler)
      .get(current_session_handler)
      .delete(delete_session_handler),
  )
}

pub async fn create_session_handler(
  State(state): State<SharedAppState>,
  mut jar: CookieJar,
  Json(payload): Json<CreateSessionRequest>,
) -> Result<(CookieJar, JsonResponse<SessionResponse>), AppError> {
  let session = establish_session(state.authenticator.as_ref(), &payload.user_id, &mut jar).await?;

  Ok((jar, JsonResponse(session.into())))
}

/// Resolves the session named by the request's session cookie, or 401.
pub fn require_session(state: &SharedAppState, jar: &CookieJar) -> Result<Session, AppError> {
  let session_id = jar
    .get(state.authenticator.cookie_name())
    .map(|cookie| cookie.value())
    .filter(|value| !value.is_empty())
    .ok_or_else(|| AppError::unauthorized("Session cookie missing"))?;

  Ok(state.authenticator.validate_session(session_id)?)
}

pub async fn current_session_handler(
  State(state): State<SharedAppState>,
  jar: CookieJar,
) -> Result<JsonResponse<SessionResponse>, AppError> {
  let session = require_session(&state, &jar)?;

  Ok(JsonResponse(session.into()))
}

pub async fn delete_session_handler(State(state): State<SharedAppState>, mut jar: CookieJar) -> (CookieJar, StatusCode) {
  clear_session(state.authenticator.as_ref(), &mut jar);

  (jar, StatusCode::NO_CONTENT)
}
