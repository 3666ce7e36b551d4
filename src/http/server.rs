use crate::concurrency::ThreadPool;
use crate::config::Config;
use crate::http::chunked;
use crate::http::handler;
use crate::http::parse::{self, ParseError};
use crate::http::resource::{FsStore, ResourceStore};
use crate::http::status::Status;
use anyhow::Context;
use std::io::{self, BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("can't write response: {0}")]
    Write(#[from] io::Error),
}

/// What happened on a connection that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The peer closed the stream before sending anything.
    NoRequest,
    Responded(Status),
}

/// Runs one request/response exchange: parse, classify, encode.
pub fn serve_connection<R: BufRead, W: Write>(
    mut reader: R,
    writer: W,
    local_port: u16,
    store: &dyn ResourceStore,
) -> Result<Outcome, ConnectionError> {
    let Some(request) = parse::read_request(&mut reader)? else {
        return Ok(Outcome::NoRequest);
    };

    let response = handler::respond(&request, store, local_port);
    let status = response.status();
    info!(
        method = %request.method(),
        uri = request.uri(),
        status = status.code_num,
        "responding"
    );

    let (lines, body) = response.into_parts();
    chunked::send(writer, lines, body, request.accepts_gzip())?;
    Ok(Outcome::Responded(status))
}

pub struct Server {
    listener: TcpListener,
    pool: ThreadPool,
    store: Arc<dyn ResourceStore>,
    config: Config,
}

impl Server {
    pub fn bind(config: Config) -> anyhow::Result<Server> {
        let addr = (config.bind, config.port);
        let listener = TcpListener::bind(addr)
            .with_context(|| format!("can't bind {}:{}", config.bind, config.port))?;
        let store: Arc<dyn ResourceStore> = Arc::new(FsStore::new(&config.root));

        Ok(Server {
            listener,
            pool: ThreadPool::new(config.workers),
            store,
            config,
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts connections forever, one pool job per connection.
    pub fn run(self) -> anyhow::Result<()> {
        info!(
            addr = %self.local_addr()?,
            root = %self.config.root.display(),
            workers = self.pool.size(),
            "listening (press CTRL-C to quit)"
        );

        for stream in self.listener.incoming() {
            let stream = match stream {
                Ok(stream) => stream,
                Err(e) => {
                    error!(error = %e, "accept failed");
                    continue;
                }
            };

            let store = Arc::clone(&self.store);
            let read_timeout = self.config.read_timeout;
            self.pool
                .execute(move || {
                    if let Err(e) = stream.set_read_timeout(read_timeout) {
                        error!(error = %e, "can't set read timeout");
                        return;
                    }
                    process_incoming(stream, store.as_ref());
                })
                .context("worker pool is gone")?;
        }
        Ok(())
    }
}

fn process_incoming(stream: TcpStream, store: &dyn ResourceStore) {
    let peer = stream.peer_addr().ok();
    debug!(?peer, "accepted connection");

    let local_port = match stream.local_addr() {
        Ok(addr) => addr.port(),
        Err(e) => {
            error!(?peer, error = %e, "can't read local address");
            return;
        }
    };

    match serve_connection(BufReader::new(&stream), &stream, local_port, store) {
        Ok(Outcome::NoRequest) => debug!(?peer, "peer closed without a request"),
        Ok(Outcome::Responded(_)) => {}
        Err(e) => error!(?peer, error = %e, "connection failed"),
    }
    // the stream is closed when it goes out of scope
}
