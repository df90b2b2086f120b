use url::Url;

/// Errors returned by the upstream client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The base URL cannot have path segments appended to it.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(Url),
    /// The request never produced a response.
    #[error("request to the upstream API failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The upstream answered with a non-success status code.
    #[error("upstream API responded with status {status} for {url}")]
    Status { status: u16, url: Url },
    /// The response body did not have the expected shape.
    #[error("unexpected response from {url}: {source}")]
    Decode {
        url: Url,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// The HTTP status returned by the upstream, if it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Request(error) => error.status().map(|status| status.as_u16()),
            Error::InvalidBaseUrl(_) | Error::Decode { .. } => None,
        }
    }
}
