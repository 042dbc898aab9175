use clap::Parser;
use tokio::net::TcpListener;
use todo_server::config::Config;
use todo_server::error::ServerError;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,todo_server=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    let config = Config::parse();

    let addr = config.addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, prefix = %config.api_prefix, "listening");
    todo_server::run(listener, &config.api_prefix).await
}
