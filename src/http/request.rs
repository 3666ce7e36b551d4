use crate::http::method::Method;

/// A parsed request line plus its raw header lines.
///
/// Built once by the parser and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: Method,
    uri: String,
    version: String,
    headers: Vec<String>,
    accepts_gzip: bool,
}

impl Request {
    pub(crate) fn new(
        method: Method,
        uri: String,
        version: String,
        headers: Vec<String>,
        accepts_gzip: bool,
    ) -> Request {
        Request {
            method,
            uri,
            version,
            headers,
            accepts_gzip,
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Header lines verbatim, in the order they arrived.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn accepts_gzip(&self) -> bool {
        self.accepts_gzip
    }
}
