use thiserror::Error;

/// Everything that can go wrong between the client and the service.
///
/// `adscope-core` folds these into its own user-facing errors; the raw
/// detail stays available through the source chain.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never completed (refused, DNS, timeout).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Joining the base URL and route path produced an invalid URL.
    #[error("bad request URL: {0}")]
    BadUrl(#[from] url::ParseError),

    /// The service answered with a non-success status.
    #[error("campaign service answered {status} for {url}")]
    Status { status: u16, url: String },

    /// The body arrived but was not the JSON shape we expect.
    #[error("undecodable response: {message}")]
    Decode { message: String, body: String },
}

impl Error {
    /// True when the service said 404 for the requested path.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Status { status, .. } => *status == 404,
            Self::Http(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            _ => false,
        }
    }
}
