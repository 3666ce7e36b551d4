use std::str::FromStr;
use strum::{Display, EnumString, IntoStaticStr};

/// Request method as it appears on the request line. Matching is case-sensitive.
#[derive(EnumString, IntoStaticStr, Display, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Method {
    #[strum(serialize = "GET")]
    Get,
    #[strum(serialize = "HEAD")]
    Head,
    #[strum(serialize = "POST")]
    Post,
    #[strum(serialize = "PUT")]
    Put,
    #[strum(serialize = "DELETE")]
    Delete,
    #[strum(serialize = "TRACE")]
    Trace,
    #[strum(serialize = "CONNECT")]
    Connect,
    /// Any token outside the set above, including a missing one.
    #[strum(serialize = "")]
    Unrecognized,
}

impl Method {
    /// Never fails: unknown tokens become [`Method::Unrecognized`].
    pub fn parse(token: &str) -> Method {
        Method::from_str(token).unwrap_or(Method::Unrecognized)
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}
