use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummonsesError {
    /// Anything the transport can fail with: connection errors, timeouts,
    /// non-success status codes and bodies that do not decode as JSON.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
