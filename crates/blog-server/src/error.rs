/// The blog server error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Cannot bind the listen address
    #[error("binding listener: {0}")]
    Bind(#[source] std::io::Error),
    /// Cannot start the HTTP server
    #[error("starting server: {0}")]
    Server(#[source] std::io::Error),
}
