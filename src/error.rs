// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Network(NetworkError),
}

/// Failures while talking to the gallery API or downloading image bytes.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// Connection, DNS or TLS failure before a response was received.
    Transport(String),

    /// The server answered with a non-2xx status code.
    Status(u16),

    /// The request did not complete within the configured timeout.
    Timeout,

    /// The response body was not the expected JSON document.
    Decode(String),

    /// The configured base URL could not be parsed.
    InvalidUrl(String),
}

impl NetworkError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            NetworkError::Transport(_) => "notification-network-unreachable",
            NetworkError::Status(code) if *code >= 500 => "notification-network-server-error",
            NetworkError::Status(_) => "notification-network-bad-status",
            NetworkError::Timeout => "notification-network-timeout",
            NetworkError::Decode(_) => "notification-network-invalid-response",
            NetworkError::InvalidUrl(_) => "notification-network-invalid-url",
        }
    }

    /// Whether re-issuing the same request could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::Transport(_) | NetworkError::Timeout => true,
            NetworkError::Status(code) => *code >= 500 || *code == 408 || *code == 429,
            NetworkError::Decode(_) | NetworkError::InvalidUrl(_) => false,
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::Transport(msg) => write!(f, "Transport failure: {}", msg),
            NetworkError::Status(code) => write!(f, "Unexpected HTTP status: {}", code),
            NetworkError::Timeout => write!(f, "Request timed out"),
            NetworkError::Decode(msg) => write!(f, "Invalid response body: {}", msg),
            NetworkError::InvalidUrl(url) => write!(f, "Invalid URL: {}", url),
        }
    }
}

impl std::error::Error for NetworkError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Network(e) => write!(f, "Network Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<NetworkError> for Error {
    fn from(err: NetworkError) -> Self {
        Error::Network(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn network_error_wraps_into_error() {
        let err: Error = NetworkError::Status(503).into();
        assert_eq!(format!("{}", err), "Network Error: Unexpected HTTP status: 503");
    }

    #[test]
    fn network_error_i18n_keys() {
        assert_eq!(
            NetworkError::Status(500).i18n_key(),
            "notification-network-server-error"
        );
        assert_eq!(
            NetworkError::Status(404).i18n_key(),
            "notification-network-bad-status"
        );
        assert_eq!(
            NetworkError::Timeout.i18n_key(),
            "notification-network-timeout"
        );
        assert_eq!(
            NetworkError::Transport("refused".into()).i18n_key(),
            "notification-network-unreachable"
        );
    }

    #[test]
    fn server_and_transport_failures_are_retryable() {
        assert!(NetworkError::Timeout.is_retryable());
        assert!(NetworkError::Transport("reset".into()).is_retryable());
        assert!(NetworkError::Status(502).is_retryable());
        assert!(NetworkError::Status(429).is_retryable());
        assert!(!NetworkError::Status(404).is_retryable());
        assert!(!NetworkError::Decode("eof".into()).is_retryable());
    }
}
