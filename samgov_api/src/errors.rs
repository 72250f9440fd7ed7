//! Errors raised while fetching a search page.

/// Why a single page request failed. The underlying cause is kept as the
/// error source.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The base URL and search path do not form a valid URL.
    #[error("Invalid search URL")]
    InvalidUrl(#[from] url::ParseError),
    /// Connection, timeout, or body read failure.
    #[error("Transport error talking to sam.gov")]
    Transport(#[source] reqwest::Error),
    /// The API answered with a non-success status. `body` is truncated.
    #[error("sam.gov returned status {status}")]
    HttpStatus { status: u16, body: String },
    /// The body was not a search page. `body` is truncated.
    #[error("Could not decode search page")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

impl Error {
    /// True when the request hit the client timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(e) if e.is_timeout())
    }

    /// True when no connection to the server could be made.
    pub fn is_connect(&self) -> bool {
        matches!(self, Error::Transport(e) if e.is_connect())
    }
}
