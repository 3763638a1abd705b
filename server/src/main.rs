use clap::Parser;
use inventory_server::Config;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let config = Config::parse();
    let listener = TcpListener::bind(&config.addr).await?;
    info!(addr = %listener.local_addr()?, seeded = !config.empty, "listening");
    inventory_server::run(listener, config.inventory()).await
}
