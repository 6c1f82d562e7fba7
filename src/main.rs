use axum::extract::DefaultBodyLimit;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;
use training_backend::{
    config::{get_config, init_config},
    middleware::cors::api_cors,
    routes, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    init_config()?;
    let config = get_config();

    let app_state = AppState::new(config)?;
    info!(
        model = %config.openai_model,
        base_url = %config.openai_base_url,
        max_retries = config.generation_max_retries,
        "Generation backend configured"
    );

    {
        let store = app_state.pipeline.store().clone();
        let ttl = chrono::Duration::seconds(config.session_ttl_secs as i64);
        let every = Duration::from_secs(config.session_sweep_interval_secs.max(1));
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(every).await;
                match store.evict_idle(ttl) {
                    Ok(0) => {}
                    Ok(evicted) => info!(
                        evicted,
                        remaining = store.session_count().unwrap_or_default(),
                        "Idle sessions evicted"
                    ),
                    Err(e) => tracing::error!(error = ?e, "Session sweep error"),
                }
            }
        });
    }

    let app = routes::router(app_state, config.api_rps)
        .layer(api_cors())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(1024 * 1024));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
