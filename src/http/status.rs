use crate::http::HTTP_VERSION;
use std::fmt;

/// One of the fixed response codes this server can send.
///
/// `template` is the error-page message; a single `*` in it is replaced with
/// request context (method, URI or version) when the page is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub code_num: u16,
    pub reason: &'static str,
    pub template: &'static str,
}

impl Status {
    pub const OK: Status = Status {
        code_num: 200,
        reason: "OK",
        template: "",
    };
    pub const MOVED_PERMANENTLY: Status = Status {
        code_num: 301,
        reason: "Moved Permanently",
        template: "",
    };
    pub const NOT_MODIFIED: Status = Status {
        code_num: 304,
        reason: "Not Modified",
        template: "",
    };
    pub const BAD_REQUEST: Status = Status {
        code_num: 400,
        reason: "Bad Request",
        template: "The request message is not understood by server, please try again.",
    };
    pub const FORBIDDEN: Status = Status {
        code_num: 403,
        reason: "Forbidden",
        template: "You don't have permission to access * on this server.",
    };
    pub const NOT_FOUND: Status = Status {
        code_num: 404,
        reason: "Not Found",
        template: "This website * is not available or the file is missing on this server.",
    };
    pub const METHOD_NOT_ALLOWED: Status = Status {
        code_num: 405,
        reason: "Method Not Allowed",
        template: "Method * is not allowed in this server.",
    };
    pub const INTERNAL_SERVER_ERROR: Status = Status {
        code_num: 500,
        reason: "Internal Server Error",
        template: "The server encounters an error, please try again later.",
    };
    pub const NOT_IMPLEMENTED: Status = Status {
        code_num: 501,
        reason: "Not Implemented",
        template: "This request method * is not supported by the server.",
    };
    pub const VERSION_NOT_SUPPORTED: Status = Status {
        code_num: 505,
        reason: "HTTP Version not supported",
        template: "HTTP Version * is not supported",
    };

    pub const ALL: [Status; 10] = [
        Status::OK,
        Status::MOVED_PERMANENTLY,
        Status::NOT_MODIFIED,
        Status::BAD_REQUEST,
        Status::FORBIDDEN,
        Status::NOT_FOUND,
        Status::METHOD_NOT_ALLOWED,
        Status::INTERNAL_SERVER_ERROR,
        Status::NOT_IMPLEMENTED,
        Status::VERSION_NOT_SUPPORTED,
    ];

    pub fn status_line(&self) -> String {
        format!("{} {}", HTTP_VERSION, self)
    }

    /// Substitutes `context` for the first `*` of the template.
    pub fn message(&self, context: &str) -> String {
        self.template.replacen('*', context, 1)
    }
}

/// Renders as `<code> <reason>`, e.g. `404 Not Found`.
impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code_num, self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_format() {
        assert_eq!(Status::NOT_FOUND.status_line(), "HTTP/1.1 404 Not Found");
        assert_eq!(
            Status::VERSION_NOT_SUPPORTED.status_line(),
            "HTTP/1.1 505 HTTP Version not supported"
        );
    }

    #[test]
    fn message_replaces_only_first_placeholder() {
        assert_eq!(
            Status::METHOD_NOT_ALLOWED.message("POST"),
            "Method POST is not allowed in this server."
        );
        let custom = Status {
            code_num: 400,
            reason: "Bad Request",
            template: "* and *",
        };
        assert_eq!(custom.message("x"), "x and *");
    }

    #[test]
    fn message_without_placeholder_is_verbatim() {
        assert_eq!(
            Status::BAD_REQUEST.message("ignored"),
            Status::BAD_REQUEST.template
        );
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<u16> = Status::ALL.iter().map(|s| s.code_num).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), Status::ALL.len());
    }
}
