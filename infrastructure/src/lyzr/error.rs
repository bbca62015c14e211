//! Error types for the Lyzr adapter

use taskdesk_application::GatewayError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LyzrError {
    #[error("{0} not configured")]
    MissingApiKey(String),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),

    #[error("Request timed out")]
    Timeout,

    #[error("Could not reach {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl LyzrError {
    /// Classify a transport error from `reqwest`
    pub fn from_transport(url: &str, error: reqwest::Error) -> Self {
        if error.is_timeout() {
            LyzrError::Timeout
        } else if error.is_connect() {
            LyzrError::Connect {
                url: url.to_string(),
                source: error,
            }
        } else {
            LyzrError::Http(error)
        }
    }
}

impl From<LyzrError> for GatewayError {
    fn from(error: LyzrError) -> Self {
        match error {
            LyzrError::MissingApiKey(_) | LyzrError::ClientBuild(_) => {
                GatewayError::NotConfigured(error.to_string())
            }
            LyzrError::Timeout => GatewayError::Timeout,
            LyzrError::Connect { .. } => GatewayError::ConnectionError(error.to_string()),
            LyzrError::Http(_) => GatewayError::RequestFailed(error.to_string()),
        }
    }
}
