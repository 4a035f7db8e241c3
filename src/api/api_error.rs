use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    /// Transport-level failure. Fatal when it hits the count probe.
    Network(String),
    /// The response arrived but did not have the expected shape.
    Data(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {msg}"),
            ApiError::Data(msg) => write!(f, "Malformed response: {msg}"),
        }
    }
}

impl Error for ApiError {}
