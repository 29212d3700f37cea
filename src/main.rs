//! Receipt Desk host: serves the Leptos front end with server-side rendering.
//!
//! The auth and receipt backend is a separate service; this binary only
//! renders pages and serves the WASM bundle.

mod config;
mod routes;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(config::log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let config = config::HostConfig::from_env()?;
    let app = routes::app()?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "receipt desk listening");
    axum::serve(listener, app).await?;
    Ok(())
}
