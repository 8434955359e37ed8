//! HTTP serving for the blog GraphQL API.
//!
//! Wires the executable schema from `blog-engine` into an axum router and
//! keeps it running until the process is told to stop.

mod error;
mod server;

pub use error::Error;
pub use server::{serve, ServerConfig};

pub type Result<T> = std::result::Result<T, Error>;
