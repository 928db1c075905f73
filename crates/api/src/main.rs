use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kitmate_api::config::ServerConfig;
use kitmate_api::router::build_app_router;
use kitmate_api::state::AppState;
use kitmate_client::{MatchApi, MatchBackend};
use kitmate_pipeline::{sweep, Orchestrator};
use kitmate_session::{sweeper, SessionStore, WelcomeLedger};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kitmate_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Matching backend ---
    let backend: Arc<dyn MatchBackend> = Arc::new(MatchApi::new(config.match_api_url.clone()));
    tracing::info!(url = %config.match_api_url, "Matching backend client created");

    // --- Session store and welcome ledger ---
    let store = Arc::new(SessionStore::new());
    let welcome = Arc::new(WelcomeLedger::new());

    // --- Idle-session sweeper ---
    let sweeper_cancel = tokio_util::sync::CancellationToken::new();
    let sweeper_handle = tokio::spawn(sweeper::run(
        Arc::clone(&store),
        Duration::from_secs(config.sweep_interval_secs),
        Duration::from_secs(config.session_idle_secs),
        sweeper_cancel.clone(),
    ));
    tracing::info!("Session sweeper started");

    // --- Orchestrator ---
    let orchestrator = Arc::new(Orchestrator::new(Arc::clone(&backend), Arc::clone(&store)));

    // --- Settled-generation sweeper ---
    let generation_sweeper_handle = tokio::spawn(sweep::run(
        Arc::clone(&orchestrator),
        Duration::from_secs(config.sweep_interval_secs),
        Duration::from_secs(config.settled_ttl_secs),
        sweeper_cancel.clone(),
    ));
    tracing::info!("Generation sweeper started");

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.clone()),
        store: Arc::clone(&store),
        welcome: Arc::clone(&welcome),
        backend,
        orchestrator,
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    sweeper_cancel.cancel();
    let _ = tokio::time::timeout(Duration::from_secs(5), sweeper_handle).await;
    let _ = tokio::time::timeout(Duration::from_secs(5), generation_sweeper_handle).await;
    tracing::info!("Background sweepers stopped");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
