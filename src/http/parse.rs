use crate::http::method::Method;
use crate::http::request::Request;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("can't read request: {0}")]
    Io(#[from] io::Error),
    #[error("bad request line: {0:?}")]
    MalformedRequestLine(String),
    #[error("stream ended before the end of the header block")]
    UnexpectedEof,
}

/// Reads one request line and its header block.
///
/// Returns `Ok(None)` when the peer closed the stream without sending
/// anything. The request body, if any, is left unread.
pub fn read_request(rdr: &mut impl BufRead) -> Result<Option<Request>, ParseError> {
    let first_line = match read_line(rdr)? {
        Some(line) => line,
        None => return Ok(None),
    };
    info!("{}", first_line);

    let mut parts = first_line.split_whitespace();
    let method = parts.next().map(Method::parse).unwrap_or(Method::Unrecognized);
    let (uri, version) = match (parts.next(), parts.next()) {
        (Some(uri), Some(version)) => (uri.to_string(), version.to_string()),
        _ => return Err(ParseError::MalformedRequestLine(first_line)),
    };

    let mut headers = Vec::new();
    let mut accepts_gzip = false;

    loop {
        let line = read_line(rdr)?.ok_or(ParseError::UnexpectedEof)?;
        if line.is_empty() {
            break;
        }
        debug!("{}", line);

        if !accepts_gzip && line.contains("Accept-Encoding") && line.contains("gzip") {
            accepts_gzip = true;
        }
        headers.push(line);
    }

    Ok(Some(Request::new(
        method,
        uri,
        version,
        headers,
        accepts_gzip,
    )))
}

/// One line without its terminator, or `None` at end of stream.
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
fn read_line(rdr: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if rdr.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    if buf.ends_with(b"\n") {
        buf.pop();
        if buf.ends_with(b"\r") {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}
