use clap::Parser;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_WORKERS: usize = 10;

/// Command line of the server binary.
#[derive(Parser, Debug)]
#[command(version, about = "Serves files over HTTP/1.1 with chunked, optionally gzipped responses")]
pub struct Args {
    /// Port to listen on (1-65534); anything else falls back to 8080
    #[arg(allow_hyphen_values = true)]
    pub port: Option<String>,

    /// Number of worker threads
    #[arg(long, default_value_t = DEFAULT_WORKERS as u64, value_parser = clap::value_parser!(u64).range(1..))]
    pub workers: u64,

    /// Directory request paths are resolved against
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Interface to listen on
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub bind: IpAddr,

    /// Socket read timeout in seconds; no timeout when omitted
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub read_timeout: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind: IpAddr,
    pub port: u16,
    pub workers: usize,
    pub root: PathBuf,
    pub read_timeout: Option<Duration>,
}

impl Config {
    pub fn from_args(args: Args) -> Config {
        Config {
            bind: args.bind,
            port: resolve_port(args.port.as_deref()),
            workers: args.workers as usize,
            root: args.root,
            read_timeout: args.read_timeout.map(Duration::from_secs),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            workers: DEFAULT_WORKERS,
            root: PathBuf::from("."),
            read_timeout: None,
        }
    }
}

/// Accepts 1..=65534; a missing or invalid value yields [`DEFAULT_PORT`].
pub fn resolve_port(raw: Option<&str>) -> u16 {
    let Some(raw) = raw else {
        return DEFAULT_PORT;
    };
    match raw.trim().parse::<u16>() {
        Ok(port) if port > 0 && port < u16::MAX => port,
        _ => {
            warn!(
                value = raw,
                "invalid port number (1-65534), starting on default port {}", DEFAULT_PORT
            );
            DEFAULT_PORT
        }
    }
}
