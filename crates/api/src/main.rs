use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use helpdesk_core::clock::{Clock, SystemClock};
use helpdesk_core::store::{AdminRepository, MemoryStore};
use helpdesk_db::PgStore;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use helpdesk_api::config::ServerConfig;
use helpdesk_api::router::build_app_router;
use helpdesk_api::state::AppState;
use helpdesk_api::{background, bootstrap};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    init_tracing();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        session_ttl_hours = config.session_ttl_hours,
        "Loaded server configuration",
    );

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    // --- Store ---
    let state = match config.database_url.clone() {
        Some(database_url) => {
            let pool = helpdesk_db::create_pool(&database_url)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection pool created");

            helpdesk_db::health_check(&pool)
                .await
                .expect("Database health check failed");

            helpdesk_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");

            let store = Arc::new(PgStore::new(pool));
            provision_admin(&config, store.as_ref()).await;
            AppState::new(config.clone(), store, clock)
        }
        None => {
            tracing::warn!(
                "DATABASE_URL is not set; using the in-memory store. Data will not survive a restart"
            );
            let store = Arc::new(MemoryStore::new());
            provision_admin(&config, store.as_ref()).await;
            AppState::new(config.clone(), store, clock)
        }
    };

    // --- Session sweep ---
    let sweep_cancel = CancellationToken::new();
    let sweep_handle = (config.session_sweep_interval_secs > 0).then(|| {
        tokio::spawn(background::session_sweep::run(
            Arc::clone(&state.sessions),
            Duration::from_secs(config.session_sweep_interval_secs),
            sweep_cancel.clone(),
        ))
    });

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

    sweep_cancel.cancel();
    if let Some(handle) = sweep_handle {
        let _ = tokio::time::timeout(Duration::from_secs(5), handle).await;
        tracing::info!("Session sweep stopped");
    }

    tracing::info!("Graceful shutdown complete");
}

/// Install the global subscriber. `LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "helpdesk_api=debug,helpdesk_core=debug,helpdesk_db=debug,tower_http=debug".into()
    });
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Provision the configured bootstrap admin. Failure here is fatal.
async fn provision_admin(config: &ServerConfig, admins: &dyn AdminRepository) {
    let Some(bootstrap_admin) = &config.bootstrap_admin else {
        return;
    };
    bootstrap::ensure_admin(admins, &bootstrap_admin.email, &bootstrap_admin.password)
        .await
        .expect("Failed to provision bootstrap admin");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
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
