//! Auth Proxy - binary entry point.

use std::process::ExitCode;
use std::sync::Arc;

use auth_proxy::adapters::http::{app_router, LoginAppState};
use auth_proxy::adapters::identity::{WebApiConfig, WebApiIdentityProvider};
use auth_proxy::adapters::token::FirebaseTokenIssuer;
use auth_proxy::config::AppConfig;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load_validated() {
        Ok(config) => config,
        Err(e) => {
            init_tracing("info", false);
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.server.log_level, config.is_production());

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Auth proxy failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// `RUST_LOG` wins over the configured level. JSON output in production.
fn init_tracing(default_level: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| fmt::layer().json().with_target(true)))
        .with((!json).then(fmt::layer))
        .init();
}

/// Builds the adapters once and serves until a shutdown signal arrives.
async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Refuse to start without a usable signing credential
    let token_issuer = FirebaseTokenIssuer::from_config(&config.issuer)?;
    tracing::info!(
        client_email = %token_issuer.client_email(),
        project_id = %token_issuer.project_id(),
        "Loaded service account"
    );

    let identity_provider = WebApiIdentityProvider::new(WebApiConfig::from(&config.identity))?;

    let state = LoginAppState::new(Arc::new(identity_provider), Arc::new(token_issuer));
    let app = app_router(state, &config.server);

    let listener = TcpListener::bind(config.server.socket_addr()?).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        identity_base_url = %config.identity.base_url,
        "Intermediate server running"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
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

    tracing::info!("Server is shutting down gracefully");
}
