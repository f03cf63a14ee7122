use tokio::signal;

use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use session_mail::app::create_app;
use session_mail::config::AppConfig;
use session_mail::state::SharedAppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let config = AppConfig::from_env()?;
  let app_state = SharedAppState::new(&config)?;

  match app_state.mailer.test_connection().await {
    Ok(true) => tracing::info!("Connected to SMTP relay {}", config.smtp.host),
    Ok(false) => tracing::warn!("SMTP relay {} did not answer the connection test", config.smtp.host),
    Err(err) => tracing::warn!("SMTP relay {} is unreachable: {}", config.smtp.host, err),
  }
  let app = create_app(app_state);

  let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

  tracing::info!("Server running on http://{}", config.bind_address);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(err) = signal::ctrl_c().await {
      tracing::error!("Failed to install Ctrl+C handler: {}", err);
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
      Ok(mut stream) => {
        stream.recv().await;
      }
      Err(err) => {
        tracing::error!("Failed to install signal handler: {}", err);
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  tracing::info!("Received termination signal, shutting down gracefully...");
}
