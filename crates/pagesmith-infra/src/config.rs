//! Global configuration loader for Pagesmith.
//!
//! Reads `config.toml` from the data directory (`~/.pagesmith/` in
//! production, overridable via `PAGESMITH_DATA_DIR`) and deserializes it
//! into [`GlobalConfig`]. Falls back to defaults when the file is missing
//! or malformed.

use std::path::{Path, PathBuf};

use pagesmith_types::config::GlobalConfig;

/// Resolve the data directory.
///
/// `PAGESMITH_DATA_DIR` wins when set; otherwise `~/.pagesmith`, or
/// `.pagesmith` in the working directory when no home is resolvable.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("PAGESMITH_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .map(|home| home.join(".pagesmith"))
        .unwrap_or_else(|| PathBuf::from(".pagesmith"))
}

/// Load global configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`GlobalConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns
///   the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_global_config(data_dir: &Path) -> GlobalConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
    };

    match toml::from_str::<GlobalConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            GlobalConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_global_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.max_tokens, 4096);
        assert_eq!(config.model, "claude-sonnet-4-20250514");
    }

    #[tokio::test]
    async fn load_global_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
model = "claude-haiku-3-5-20250514"
max_tokens = 2048
port = 9000
"#,
        )
        .await
        .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.model, "claude-haiku-3-5-20250514");
        assert_eq!(config.max_tokens, 2048);
        assert_eq!(config.port, 9000);
    }

    #[tokio::test]
    async fn load_global_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.max_tokens, 4096);
    }
}
