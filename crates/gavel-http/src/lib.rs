//! gavel-http - HTTP-backed transport and client facade.

mod client;
mod transport;

pub use client::Client;
pub use transport::HttpTransport;
