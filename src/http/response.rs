use crate::http::SERVER_NAME;
use crate::http::status::Status;
use bytes::Bytes;

/// Status, extra header lines and body of one response.
///
/// The status line, `Connection: close` and `Server` lines are derived from
/// the status and always come first; `headers` holds everything after them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMessage {
    status: Status,
    headers: Vec<String>,
    body: Option<Bytes>,
}

impl ResponseMessage {
    pub fn new(status: Status) -> ResponseMessage {
        ResponseMessage {
            status,
            headers: Vec::new(),
            body: None,
        }
    }

    /// A non-200 response whose body is the rendered error page.
    pub fn error(status: Status, context: &str, local_port: u16) -> ResponseMessage {
        ResponseMessage::new(status).with_body(error_page(status, context, local_port))
    }

    pub fn with_header(mut self, name: &str, value: impl AsRef<str>) -> ResponseMessage {
        self.headers.push(format!("{}: {}", name, value.as_ref()));
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> ResponseMessage {
        self.body = Some(body.into());
        self
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Every header line in wire order, starting with the status line.
    pub fn header_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.headers.len() + 3);
        lines.push(self.status.status_line());
        lines.push("Connection: close".to_string());
        lines.push(format!("Server: {}", SERVER_NAME));
        lines.extend(self.headers.iter().cloned());
        lines
    }

    pub fn into_parts(self) -> (Vec<String>, Option<Bytes>) {
        let lines = self.header_lines();
        (lines, self.body)
    }
}

/// Minimal HTML page describing `status`, with `context` substituted into its message.
pub fn error_page(status: Status, context: &str, local_port: u16) -> Bytes {
    let page = format!(
        "<HTML><HEAD>\r\n\
         <TITLE>{status}</TITLE>\r\n\
         </HEAD><BODY>\r\n\
         <H1>{reason}</H1>\r\n\
         <P>{message}</P>\r\n\
         <HR>\r\n\
         <P><I>{server} at localhost Port {port}</I></P>\r\n\
         </BODY></HTML>\r\n",
        status = status,
        reason = status.reason,
        message = status.message(context),
        server = SERVER_NAME,
        port = local_port,
    );
    Bytes::from(page)
}
