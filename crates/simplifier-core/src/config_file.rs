use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub api: Option<ApiConfig>,
    pub server: Option<ServerConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub mistral_api_key: Option<String>,
    pub model: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: Option<u16>,
    pub max_upload_mb: Option<u32>,
}

/// Platform config directory path: `<config_dir>/simplifier/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("simplifier").join("config.toml"))
}

/// Load config by cascading CWD `.simplifier.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(&PathBuf::from(".simplifier.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &PathBuf) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    ConfigFile {
        api: Some(ApiConfig {
            mistral_api_key: overlay
                .api
                .as_ref()
                .and_then(|a| a.mistral_api_key.clone())
                .or_else(|| base.api.as_ref().and_then(|a| a.mistral_api_key.clone())),
            model: overlay
                .api
                .as_ref()
                .and_then(|a| a.model.clone())
                .or_else(|| base.api.as_ref().and_then(|a| a.model.clone())),
            timeout_secs: overlay
                .api
                .as_ref()
                .and_then(|a| a.timeout_secs)
                .or_else(|| base.api.as_ref().and_then(|a| a.timeout_secs)),
        }),
        server: Some(ServerConfig {
            port: overlay
                .server
                .as_ref()
                .and_then(|s| s.port)
                .or_else(|| base.server.as_ref().and_then(|s| s.port)),
            max_upload_mb: overlay
                .server
                .as_ref()
                .and_then(|s| s.max_upload_mb)
                .or_else(|| base.server.as_ref().and_then(|s| s.max_upload_mb)),
        }),
    }
}

impl ConfigFile {
    /// API key: `MISTRAL_API_KEY` env var wins over the config file.
    pub fn mistral_api_key(&self) -> Option<String> {
        std::env::var("MISTRAL_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .or_else(|| self.api.as_ref().and_then(|a| a.mistral_api_key.clone()))
    }

    /// Model name, falling back to the client default.
    pub fn model(&self) -> String {
        self.api
            .as_ref()
            .and_then(|a| a.model.clone())
            .unwrap_or_else(|| crate::gateway::mistral::DEFAULT_MODEL.to_string())
    }

    /// Request timeout in seconds.
    pub fn timeout_secs(&self) -> u64 {
        self.api
            .as_ref()
            .and_then(|a| a.timeout_secs)
            .unwrap_or(crate::gateway::mistral::DEFAULT_TIMEOUT_SECS)
    }

    /// Listen port: `PORT` env var wins over the config file; default 8000.
    pub fn port(&self) -> u16 {
        std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .or_else(|| self.server.as_ref().and_then(|s| s.port))
            .unwrap_or(8000)
    }

    /// Upload body limit in megabytes; default 50.
    pub fn max_upload_mb(&self) -> u32 {
        self.server
            .as_ref()
            .and_then(|s| s.max_upload_mb)
            .unwrap_or(50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_config() {
        let config: ConfigFile = toml::from_str(
            r#"
            [api]
            model = "mistral-large-latest"
            "#,
        )
        .unwrap();
        assert_eq!(config.model(), "mistral-large-latest");
        assert_eq!(config.timeout_secs(), 60);
    }

    #[test]
    fn test_merge_overlay_wins() {
        let base: ConfigFile = toml::from_str(
            r#"
            [api]
            mistral_api_key = "base-key"
            model = "base-model"
            [server]
            port = 9000
            "#,
        )
        .unwrap();
        let overlay: ConfigFile = toml::from_str(
            r#"
            [api]
            model = "overlay-model"
            "#,
        )
        .unwrap();

        let merged = merge(base, overlay);
        assert_eq!(merged.model(), "overlay-model");
        assert_eq!(
            merged.api.as_ref().unwrap().mistral_api_key.as_deref(),
            Some("base-key")
        );
        assert_eq!(merged.server.as_ref().unwrap().port, Some(9000));
    }

    #[test]
    fn test_defaults() {
        let config = ConfigFile::default();
        assert_eq!(config.max_upload_mb(), 50);
        assert_eq!(config.model(), "mistral-small-latest");
    }
}
