use axum::{response::Html, routing::get, Router};

use crate::{
  rest::{mail_routes, session_routes},
  state::SharedAppState,
};

pub fn create_app(state: SharedAppState) -> Router {
  Router::new()
    .route("/", get(health_handler))
    .nest("/api/v1", session_routes().merge(mail_routes()))
    .with_state(state)
}

pub async fn health_handler() -> Html<String> {
  Html("<h1>OK</h1>".to_string())
}
