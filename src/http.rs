//! One-request-per-connection HTTP/1.1 file serving.
//!
//! A connection goes through `parse` (request line and headers), `handler`
//! (status selection and body assembly against a [`resource::ResourceStore`])
//! and `chunked` (optional gzip plus chunked framing). `server` drives that
//! pipeline for every accepted TCP stream.

pub mod chunked;
pub mod compression;
pub mod content_type;
pub mod handler;
pub mod method;
pub mod parse;
pub mod request;
pub mod resource;
pub mod response;
pub mod server;
pub mod status;

/// The only protocol version the server answers.
pub const HTTP_VERSION: &str = "HTTP/1.1";

/// Value of the `Server` header and the error-page footer.
pub const SERVER_NAME: &str = "RustHttpFileServer";

pub use request::Request;
pub use response::ResponseMessage;
pub use status::Status;
