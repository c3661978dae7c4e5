//! Engine configuration.
//!
//! Provides configuration file handling and validation for the placement
//! engine. Supports JSON and TOML file formats stored in platform-specific
//! directories.
//!
//! Configuration is organized into logical sections:
//! - Cache settings (directory override, entry TTL)
//! - Placement settings (fallback design scale, remote sync toggle)

use placekit_core::constants::{DEFAULT_CACHE_TTL_HOURS, DEFAULT_DESIGN_SCALE};
use placekit_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Local cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSettings {
    /// Cache directory override; platform cache dir when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
    /// TTL for cached placement entries, in hours.
    pub max_age_hours: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            directory: None,
            max_age_hours: DEFAULT_CACHE_TTL_HOURS,
        }
    }
}

/// Placement resolution settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementSettings {
    /// Fallback design scale used when no record exists anywhere.
    pub default_scale: f64,
    /// Whether enriched records are pushed back to the remote store.
    pub sync_enabled: bool,
}

impl Default for PlacementSettings {
    fn default() -> Self {
        Self {
            default_scale: DEFAULT_DESIGN_SCALE,
            sync_enabled: true,
        }
    }
}

/// Complete engine configuration.
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    /// Local cache settings.
    #[serde(default)]
    pub cache: CacheSettings,
    /// Placement resolution settings.
    #[serde(default)]
    pub placement: PlacementSettings,
}

impl EngineConfig {
    /// Default configuration file path in the platform config directory.
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("No config directory available".to_string()))?;
        Ok(config_dir.join("placekit").join("config.toml"))
    }

    /// Default cache directory in the platform cache directory.
    pub fn default_cache_dir() -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| Error::Config("No cache directory available".to_string()))?;
        Ok(cache_dir.join("placekit").join("positions"))
    }

    /// The cache directory to use: the configured override, or the
    /// platform default.
    pub fn resolved_cache_dir(&self) -> Result<PathBuf> {
        match &self.cache.directory {
            Some(dir) => Ok(dir.clone()),
            None => Self::default_cache_dir(),
        }
    }

    /// Load config from file (JSON or TOML, by extension).
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .map_err(|e| Error::Config(format!("Invalid JSON config: {}", e)))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Invalid TOML config: {}", e)))?
        } else {
            return Err(Error::Config(
                "Config file must be .json or .toml".to_string(),
            ));
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML, by extension).
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)
                .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)
                .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?
        } else {
            return Err(Error::Config(
                "Config file must be .json or .toml".to_string(),
            ));
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config dir: {}", e)))?;
        }
        std::fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.cache.max_age_hours == 0 {
            return Err(Error::Config("Cache TTL must be > 0 hours".to_string()));
        }

        if self.placement.default_scale <= 0.0 || self.placement.default_scale > 4.0 {
            return Err(Error::Config(
                "Default design scale must be in (0, 4]".to_string(),
            ));
        }

        Ok(())
    }
}
