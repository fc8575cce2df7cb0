use anyhow::Context;
use egg_shop::config::AppConfig;
use egg_shop::router::create_app_router;
use egg_shop::state::AppState;
use egg_shop::telemetry;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the real environment still applies
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("failed to read configuration")?;
    telemetry::init(config.log_json);

    // Initialize application state
    let port = config.port;
    let state = Arc::new(AppState::new(config));

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("Server starting on http://localhost:{port}");
    tracing::info!("GraphQL endpoint: http://localhost:{port}/graphql");
    tracing::info!("GraphQL playground: http://localhost:{port}/playground");
    tracing::info!("JSON-RPC endpoint: http://localhost:{port}/rpc");
    tracing::info!("Frontend: http://localhost:{port}/");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
