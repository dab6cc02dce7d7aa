//! Client configuration.

use std::time::Duration;

/// Configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Compression configuration.
    pub compression: CompressionConfig,
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// User-Agent header value.
    pub user_agent: String,
    /// Whether to enable request/response tracing.
    pub enable_tracing: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            compression: CompressionConfig::default(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: crate::USER_AGENT.to_string(),
            enable_tracing: true,
        }
    }
}

impl ClientConfig {
    /// Create a new client config builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for ClientConfig.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Accept compressed responses.
    pub fn with_compression(mut self, enabled: bool) -> Self {
        self.config.compression.accept_compressed = enabled;
        self
    }

    /// Set compression configuration.
    pub fn with_compression_config(mut self, config: CompressionConfig) -> Self {
        self.config.compression = config;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set connection timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set custom User-Agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Enable or disable request/response tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.config.enable_tracing = enabled;
        self
    }

    /// Build the client configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

/// Configuration for response compression.
///
/// Describe documents for large objects run to hundreds of kilobytes, so
/// gzip is accepted by default.
#[derive(Debug, Clone)]
pub struct CompressionConfig {
    /// Accept compressed responses.
    pub accept_compressed: bool,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            accept_compressed: true,
        }
    }
}

impl CompressionConfig {
    /// Disable all compression.
    pub fn disabled() -> Self {
        Self {
            accept_compressed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.compression.accept_compressed);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.user_agent.contains("busbar-sf-schema"));
        assert!(config.enable_tracing);
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::builder()
            .with_timeout(Duration::from_secs(60))
            .with_compression(false)
            .with_user_agent("custom-agent/1.0")
            .with_tracing(false)
            .build();

        assert!(!config.compression.accept_compressed);
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.user_agent, "custom-agent/1.0");
        assert!(!config.enable_tracing);
    }

    #[test]
    fn test_compression_disabled() {
        let config = ClientConfig::builder()
            .with_compression_config(CompressionConfig::disabled())
            .build();
        assert!(!config.compression.accept_compressed);
    }
}
