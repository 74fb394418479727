use thiserror::Error;

/// Everything that can go wrong on a user action, grouped by how the UI
/// reacts: `Auth` ends the session, the other two are surfaced inline and
/// the action can be retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Bad credentials or an expired session (HTTP 401).
    #[error("{0}")]
    Auth(String),

    /// Caught client-side before any request is made.
    #[error("{0}")]
    Validation(String),

    /// Non-2xx response or transport failure.
    #[error("{0}")]
    Network(String),
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
