//! Client configuration.

use std::time::Duration;

/// Configuration options for the NHL API client.
///
/// Supplied once at client construction and immutable thereafter; every
/// request made through the client uses the same settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Request timeout (default: 10 seconds).
    pub timeout: Duration,
    /// Whether to verify TLS certificates (default: `true`; disabling is
    /// intended for test harnesses only).
    pub verify_tls: bool,
    /// Whether to follow HTTP redirects (default: `true`).
    pub follow_redirects: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            verify_tls: true,
            follow_redirects: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        // Arrange & Act
        let config = ClientConfig::default();

        // Assert
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.verify_tls);
        assert!(config.follow_redirects);
    }

    #[test]
    fn test_custom_config() {
        // Arrange & Act
        let config = ClientConfig {
            timeout: Duration::from_secs(30),
            verify_tls: false,
            follow_redirects: false,
        };

        // Assert
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(!config.verify_tls);
        assert!(!config.follow_redirects);
    }
}
