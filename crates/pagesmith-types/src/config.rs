//! Global configuration for Pagesmith.
//!
//! Deserialized from `config.toml` in the data directory. Every field has
//! a default so a missing or partial file still yields a usable config.

use serde::{Deserialize, Serialize};

/// Global configuration loaded from `{data_dir}/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Model identifier sent to the provider.
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum tokens requested per completion.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature; `None` uses the provider default.
    #[serde(default)]
    pub temperature: Option<f64>,

    /// Override the provider base URL (testing, proxies).
    #[serde(default)]
    pub base_url: Option<String>,

    /// Host the HTTP server binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the HTTP server binds to.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

fn default_max_tokens() -> u32 {
    4096
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8787
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: None,
            base_url: None,
            host: default_host(),
            port: default_port(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GlobalConfig::default();
        assert_eq!(config.model, "claude-sonnet-4-20250514");
        assert_eq!(config.max_tokens, 4096);
        assert!(config.temperature.is_none());
        assert!(config.base_url.is_none());
        assert_eq!(config.port, 8787);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: GlobalConfig = toml::from_str("max_tokens = 2048").unwrap();
        assert_eq!(config.max_tokens, 2048);
        assert_eq!(config.model, "claude-sonnet-4-20250514");
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn test_full_toml() {
        let config: GlobalConfig = toml::from_str(
            r#"
model = "claude-haiku-3-5-20250514"
max_tokens = 1024
temperature = 0.2
base_url = "http://localhost:9999"
host = "0.0.0.0"
port = 8080
"#,
        )
        .unwrap();
        assert_eq!(config.model, "claude-haiku-3-5-20250514");
        assert_eq!(config.temperature, Some(0.2));
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:9999"));
        assert_eq!(config.port, 8080);
    }
}
