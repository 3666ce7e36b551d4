use crate::http::HTTP_VERSION;
use crate::http::content_type::ContentType;
use crate::http::method::Method;
use crate::http::request::Request;
use crate::http::resource::{self, Resource, ResourceStore};
use crate::http::response::ResponseMessage;
use crate::http::status::Status;
use httpdate::fmt_http_date;
use std::io;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::warn;

/// Why a GET for an existing file could not be served.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no content type for {0}")]
    UnmappedExtension(String),
    #[error("can't read resource: {0}")]
    Io(#[from] io::Error),
    #[error("modification time of {0} can't be written as an HTTP date")]
    ModifiedOutOfRange(String),
}

/// Last second an HTTP date can express, 9999-12-31T23:59:59Z.
const MAX_HTTP_DATE_SECS: u64 = 253_402_300_799;

/// `None` for times before 1970 or after year 9999, which `httpdate` can't format.
fn http_date(time: SystemTime) -> Option<String> {
    let since_epoch = time.duration_since(UNIX_EPOCH).ok()?;
    if since_epoch > Duration::from_secs(MAX_HTTP_DATE_SECS) {
        return None;
    }
    Some(fmt_http_date(time))
}

/// Chooses the single status for `req` and builds the matching response.
///
/// `local_port` only feeds the footer of error pages.
pub fn respond(req: &Request, store: &dyn ResourceStore, local_port: u16) -> ResponseMessage {
    let error = |status: Status, context: &str| ResponseMessage::error(status, context, local_port);

    let method = req.method();
    match method {
        Method::Unrecognized => error(Status::BAD_REQUEST, ""),
        _ if req.version() != HTTP_VERSION => error(Status::VERSION_NOT_SUPPORTED, req.version()),
        Method::Head => ResponseMessage::new(Status::OK),
        Method::Get => get(req.uri(), store, local_port),
        Method::Post => error(Status::METHOD_NOT_ALLOWED, "POST"),
        Method::Put | Method::Delete | Method::Trace | Method::Connect => {
            error(Status::NOT_IMPLEMENTED, method.as_str())
        }
    }
}

fn get(uri: &str, store: &dyn ResourceStore, local_port: u16) -> ResponseMessage {
    if resource::escapes_root(uri) {
        return ResponseMessage::error(Status::FORBIDDEN, uri, local_port);
    }

    let outcome = store
        .stat(uri)
        .map_err(ResolveError::from)
        .and_then(|found| match found {
            Resource::Directory => Ok(ResponseMessage::error(Status::FORBIDDEN, uri, local_port)),
            Resource::Absent => Ok(ResponseMessage::error(Status::NOT_FOUND, uri, local_port)),
            Resource::File { modified } => serve_file(uri, modified, store),
        });

    match outcome {
        Ok(resp) => resp,
        // every failure looks the same to the client
        Err(e) => {
            warn!(uri, error = %e, "GET resolution failed");
            ResponseMessage::error(Status::BAD_REQUEST, "", local_port)
        }
    }
}

fn serve_file(
    uri: &str,
    modified: SystemTime,
    store: &dyn ResourceStore,
) -> Result<ResponseMessage, ResolveError> {
    let content_type = ContentType::from_uri(uri)
        .ok_or_else(|| ResolveError::UnmappedExtension(uri.to_string()))?;
    let last_modified =
        http_date(modified).ok_or_else(|| ResolveError::ModifiedOutOfRange(uri.to_string()))?;
    let content = store.read(uri)?;

    Ok(ResponseMessage::new(Status::OK)
        .with_header("Content-Type", content_type.mime())
        .with_header("Date", fmt_http_date(SystemTime::now()))
        .with_header("Last-Modified", last_modified)
        .with_body(content))
}
