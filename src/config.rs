use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the optional project config file.
pub const CONFIG_FILE: &str = "webforge.json";

/// Top-level webforge.json schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebforgeConfig {
    /// Directory local image paths are resolved against. Defaults to the
    /// working directory.
    #[serde(default)]
    pub asset_root: Option<PathBuf>,

    /// File the watcher writes the live preview to.
    #[serde(default = "default_preview_file")]
    pub preview_file: PathBuf,

    /// Quiet period after a change before the preview is rebuilt.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for WebforgeConfig {
    fn default() -> Self {
        Self {
            asset_root: None,
            preview_file: default_preview_file(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_preview_file() -> PathBuf {
    PathBuf::from("temp_preview.html")
}

fn default_debounce_ms() -> u64 {
    200
}

impl WebforgeConfig {
    /// Asset resolver for this configuration.
    pub fn resolver(&self) -> webforge_core::FsResolver {
        match &self.asset_root {
            Some(root) => webforge_core::FsResolver::with_base(root.clone()),
            None => webforge_core::FsResolver::current_dir(),
        }
    }
}

/// Load config from a webforge.json file, or return defaults if missing.
pub fn load_config(project_root: &Path) -> Result<WebforgeConfig> {
    let config_path = project_root.join(CONFIG_FILE);

    if config_path.exists() {
        let raw = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let mut config: WebforgeConfig = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        // A relative asset root is relative to the config file, not the caller.
        if let Some(root) = config.asset_root.take() {
            config.asset_root = Some(if root.is_relative() {
                project_root.join(root)
            } else {
                root
            });
        }
        log::debug!("loaded {}", config_path.display());
        Ok(config)
    } else {
        Ok(WebforgeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_config() {
        let json = r#"{
            "assetRoot": "/srv/site/assets",
            "previewFile": "out/preview.html",
            "debounceMs": 500
        }"#;

        let config: WebforgeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.asset_root, Some(PathBuf::from("/srv/site/assets")));
        assert_eq!(config.preview_file, PathBuf::from("out/preview.html"));
        assert_eq!(config.debounce_ms, 500);
    }

    #[test]
    fn test_defaults() {
        let config: WebforgeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, WebforgeConfig::default());
        assert_eq!(config.preview_file, PathBuf::from("temp_preview.html"));
        assert_eq!(config.debounce_ms, 200);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = std::env::temp_dir().join("webforge-config-missing");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        assert_eq!(load_config(&dir).unwrap(), WebforgeConfig::default());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_relative_asset_root_is_anchored() {
        let dir = std::env::temp_dir().join("webforge-config-relative");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(CONFIG_FILE), r#"{ "assetRoot": "static" }"#).unwrap();

        let config = load_config(&dir).unwrap();
        assert_eq!(config.asset_root, Some(dir.join("static")));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = std::env::temp_dir().join("webforge-config-malformed");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(CONFIG_FILE), "{ not json").unwrap();

        let err = load_config(&dir).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
