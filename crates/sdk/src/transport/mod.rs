//! Transport layer.

mod http;

pub use http::HttpTransport;
