//! A small threaded HTTP/1.1 file server.

pub mod concurrency;
pub mod config;
pub mod http;
