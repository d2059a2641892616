//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::rules::Rule;

/// Rule set for one gatekeeper instance.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BlockPathConfig {
    /// Ordered blocking rules. Earlier rules take priority.
    pub elements: Vec<Rule>,
}

impl BlockPathConfig {
    pub fn new(elements: Vec<Rule>) -> Self {
        Self { elements }
    }
}

/// Root configuration for the standalone server.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Instance name used in log events.
    pub name: String,

    /// Listener configuration.
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Path blocking rules.
    pub blockpath: BlockPathConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "blockpath".to_string(),
            listener: ListenerConfig::default(),
            timeouts: TimeoutConfig::default(),
            observability: ObservabilityConfig::default(),
            blockpath: BlockPathConfig::default(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error) or a full filter directive.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_toml() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config.name, "blockpath");
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.timeouts.request_secs, 30);
        assert!(config.blockpath.elements.is_empty());
    }

    #[test]
    fn test_rules_from_toml() {
        let config: ServerConfig = toml::from_str(
            r#"
            [[blockpath.elements]]
            regex = "^/admin"
            code = 403

            [[blockpath.elements]]
            regex = "/secret"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.blockpath.elements,
            vec![Rule::new("^/admin", Some(403)), Rule::new("/secret", None)]
        );
    }

    #[test]
    fn test_plugin_block_from_json() {
        let config: BlockPathConfig =
            serde_json::from_str(r#"{"elements": [{"regex": "/x", "code": 404}]}"#).unwrap();
        assert_eq!(config, BlockPathConfig::new(vec![Rule::new("/x", Some(404))]));

        let empty: BlockPathConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, BlockPathConfig::default());
    }
}
