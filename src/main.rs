use recipe_server::api::{self, AppState};
use recipe_server::config::AppConfig;
use recipe_server::storage::RecipeStore;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    install_panic_hook();

    info!("🚀 Starting recipe server");

    // Load configuration
    let config = AppConfig::load()?;
    info!("📋 Configuration loaded");
    info!("   - Environment: {}", config.server.environment);
    info!("   - Recipes: {}", config.storage.recipes_path.display());
    info!("   - Static root: {}", config.storage.static_root.display());

    if !config.storage.static_root.is_dir() {
        warn!(
            path = %config.storage.static_root.display(),
            "Static root is not a directory, static requests will 404"
        );
    }

    // Load recipes once; the store is immutable from here on
    let recipes = RecipeStore::load(&config.storage.recipes_path);

    let addr = config.bind_addr();
    let app = api::router(AppState::new(config, recipes));

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 Server listening on http://{}", addr);
    info!("📡 Available endpoints:");
    info!("   GET  /api/recipes      - All recipes");
    info!("   GET  /api/health       - Health check");
    info!("   GET  /api/debug        - Deployment diagnostics");
    info!("   GET  /*                - Static files");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutting down gracefully");

    Ok(())
}

/// Panics anywhere in the process are fatal; an external supervisor restarts us.
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        error!("💥 Fatal panic: {}", info);
        std::process::exit(1);
    }));
}

/// Graceful shutdown handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
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

    info!("🛑 Shutdown signal received");
}
