//! Configuration system using TOML files.
//!
//! Config is read from the OS-standard config directory:
//! - Windows: %APPDATA%\met-gallery\config.toml
//! - macOS: ~/Library/Application Support/met-gallery/config.toml
//! - Linux: ~/.config/met-gallery/config.toml
//!
//! The file is optional. Every field has a default, and command-line
//! flags override what the file says.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::collection::DEFAULT_BASE_URL;
use crate::gallery::{Category, DEFAULT_SAMPLE_SIZE};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Collection API settings
    pub api: ApiConfig,

    /// Gallery settings
    pub gallery: GalleryConfig,
}

/// Collection API settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the collection API (without trailing `/objects`)
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Gallery settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// How many objects to draw per load
    pub sample_size: usize,

    /// Category applied when the gallery opens
    pub default_category: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            default_category: Category::All.to_string(),
        }
    }
}

impl GalleryConfig {
    /// The default category, if it names one of the selectable options
    pub fn default_category(&self) -> Category {
        Category::from_option(&self.default_category).unwrap_or_else(|| {
            tracing::warn!(
                "Unknown default category {:?} in config, using All",
                self.default_category
            );
            Category::All
        })
    }
}

impl Config {
    /// Replace values that cannot work with their defaults
    pub fn sanitized(mut self) -> Self {
        if self.gallery.sample_size == 0 {
            tracing::warn!(
                "sample_size = 0 in config, using {}",
                DEFAULT_SAMPLE_SIZE
            );
            self.gallery.sample_size = DEFAULT_SAMPLE_SIZE;
        }
        if self.api.base_url.trim().is_empty() {
            tracing::warn!("Empty api.base_url in config, using {}", DEFAULT_BASE_URL);
            self.api.base_url = DEFAULT_BASE_URL.to_string();
        }
        self
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("met-gallery"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the standard location
///
/// Returns default config if the file doesn't exist or can't be parsed.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };

    if !path.exists() {
        tracing::debug!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    load_or_default(&path)
}

/// Load configuration from `path`, falling back to defaults on any error
pub fn load_or_default(path: &Path) -> Config {
    match load_from(path) {
        Ok(config) => {
            tracing::info!("Loaded config from {:?}", path);
            config
        }
        Err(e) => {
            tracing::error!("{}", e);
            tracing::warn!("Using default configuration");
            Config::default()
        }
    }
}

/// Load configuration from `path`
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
    let config: Config =
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
    Ok(config.sanitized())
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("Failed to parse config file {0}: {1}")]
    Parse(PathBuf, toml::de::Error),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("[api]"));
        assert!(toml.contains("[gallery]"));
        assert!(toml.contains("sample_size = 10"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml = r#"
[gallery]
default_category = "Paintings"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.gallery.default_category(), Category::Paintings);
        assert_eq!(config.gallery.sample_size, DEFAULT_SAMPLE_SIZE);
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_unknown_default_category_falls_back() {
        let gallery = GalleryConfig {
            default_category: "Textiles".to_string(),
            ..Default::default()
        };
        assert_eq!(gallery.default_category(), Category::All);
    }

    #[test]
    fn test_sanitized_fixes_zero_sample_size() {
        let mut config = Config::default();
        config.gallery.sample_size = 0;
        config.api.base_url = " ".to_string();

        let config = config.sanitized();
        assert_eq!(config.gallery.sample_size, DEFAULT_SAMPLE_SIZE);
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[api]\nbase_url = \"http://localhost:9000/v1\"\n\n[gallery]\nsample_size = 4\n",
        )
        .unwrap();

        let config = load_from(&path).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:9000/v1");
        assert_eq!(config.gallery.sample_size, 4);
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::Read(_, _))));
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[gallery\nsample_size = ").unwrap();

        assert!(matches!(load_from(&path), Err(ConfigError::Parse(_, _))));
        assert_eq!(load_or_default(&path), Config::default());
    }
}
