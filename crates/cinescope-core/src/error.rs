use cinescope_omdb::TransportError;
use thiserror::Error;
use tracing::error;

/// User-facing gateway failure; `Display` is the message shown to the user
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Network error. Please check your connection.")]
    Network,
    #[error("Invalid API key.")]
    InvalidApiKey,
    #[error("Too many requests. Please wait.")]
    RateLimited,
    #[error("Unable to load movies. Please try again.")]
    Unavailable,
}

impl From<&TransportError> for GatewayError {
    fn from(e: &TransportError) -> Self {
        match e {
            TransportError::Connection(_) => GatewayError::Network,
            TransportError::Status { status: 401, .. } => GatewayError::InvalidApiKey,
            TransportError::Status { status: 429, .. } => GatewayError::RateLimited,
            TransportError::Status { .. } | TransportError::Decode(_) => GatewayError::Unavailable,
        }
    }
}

/// Log the underlying failure and keep only the translated message
pub(crate) fn normalize(operation: &str, e: TransportError) -> GatewayError {
    error!("OMDb API error during {}: {}", operation, e);
    GatewayError::from(&e)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> TransportError {
        TransportError::Status {
            status: code,
            body: String::new(),
        }
    }

    #[test]
    fn test_transport_errors_map_to_four_messages() {
        assert_eq!(
            GatewayError::from(&TransportError::Connection("refused".to_string())),
            GatewayError::Network
        );
        assert_eq!(GatewayError::from(&status(401)), GatewayError::InvalidApiKey);
        assert_eq!(GatewayError::from(&status(429)), GatewayError::RateLimited);
        assert_eq!(GatewayError::from(&status(500)), GatewayError::Unavailable);
        assert_eq!(
            GatewayError::from(&TransportError::Decode("eof".to_string())),
            GatewayError::Unavailable
        );
    }

    #[test]
    fn test_messages_hide_the_cause() {
        let e = normalize("search", TransportError::Connection("dns lookup failed for host".to_string()));
        assert_eq!(e.to_string(), "Network error. Please check your connection.");
        assert_eq!(GatewayError::InvalidApiKey.to_string(), "Invalid API key.");
        assert_eq!(GatewayError::RateLimited.to_string(), "Too many requests. Please wait.");
    }
}
