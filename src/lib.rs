//! minihttpd - Minimal HTTP/1.1 server
//!
//! Serves a greeting, an echo endpoint, a `User-Agent` reflector and a
//! directory of files that can be read and written over HTTP.

pub mod config;
pub mod http;
pub mod router;
pub mod server;
pub mod store;
