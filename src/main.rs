use std::net::SocketAddr;

use anyhow::Context;
use repository::Repository;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = util::load_config("Config.toml")
        .context("failed to load Config.toml")?;
    let config = api::init_config(&config)?;

    let secrets = util::load_env()
        .context("failed to load Secrets.toml, see Secrets.example.toml")?;
    let credentials = api::init_credentials(&secrets)?;

    let repository =
        Repository::new(&config.database.url, config.database.max_connections)
            .await
            .context("failed to open database")?;

    let router = api::serve(repository, &config, credentials)?;

    let address = SocketAddr::new(config.server.address, config.server.port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    info!(task = "listen", %address, admin = %format!("http://{address}/admin"));

    Ok(axum::serve(listener, router.into_make_service()).await?)
}
