use clap::Parser;
use http_file_server::config::{Args, Config};
use http_file_server::http::server::Server;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .init();

    let config = Config::from_args(Args::parse());
    Server::bind(config)?.run()
}
