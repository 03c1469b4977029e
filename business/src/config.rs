//! Studio settings: output size, cache location and content authority.

use std::env::vars;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;

use crate::render::DEFAULT_SIZE;
use crate::symbol::MAX_DIMENSION;

/// Authority used to build content references for exported files.
pub const DEFAULT_AUTHORITY: &str = "com.qr.provider";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioConfig {
    /// Source resolution of the rendered QR code in pixels.
    pub size: u32,
    /// App-private cache root. Exports go to `qr_images/` below it.
    pub cache_dir: PathBuf,
    /// Authority component of exported content references.
    pub authority: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid environment configuration: {0}")]
    Env(#[from] serde_env::Error),
    #[error("QRSTUDIO_SIZE must be positive")]
    ZeroSize,
    #[error("QRSTUDIO_SIZE={size} exceeds the maximum of {max}")]
    SizeTooLarge { size: u32, max: u32 },
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    qrstudio_size: Option<u32>,
    qrstudio_cache_dir: Option<String>,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            cache_dir: default_cache_dir(),
            authority: DEFAULT_AUTHORITY.to_owned(),
        }
    }
}

impl StudioConfig {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            ..Self::default()
        }
    }

    /// Reads `QRSTUDIO_SIZE` and `QRSTUDIO_CACHE_DIR` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(vars())
    }

    pub fn from_vars<I, S>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawConfig = serde_env::from_iter(vars)?;
        let mut config = Self::default();

        if let Some(size) = raw.qrstudio_size {
            if size == 0 {
                return Err(ConfigError::ZeroSize);
            }
            if size > MAX_DIMENSION {
                return Err(ConfigError::SizeTooLarge {
                    size,
                    max: MAX_DIMENSION,
                });
            }
            config.size = size;
        }
        if let Some(dir) = raw.qrstudio_cache_dir {
            log::info!("Using QRSTUDIO_CACHE_DIR={dir}");
            config.cache_dir = PathBuf::from(dir);
        }

        Ok(config)
    }
}

fn default_cache_dir() -> PathBuf {
    match ProjectDirs::from("com", "qr", "QrStudio") {
        Some(dirs) => dirs.cache_dir().to_path_buf(),
        None => {
            log::debug!("No home directory, falling back to temp dir for cache");
            std::env::temp_dir().join("qrstudio")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StudioConfig::default();
        assert_eq!(config.size, 512);
        assert_eq!(config.authority, "com.qr.provider");
        assert!(config.cache_dir.is_absolute() || config.cache_dir.ends_with("qrstudio"));
    }

    #[test]
    fn test_env_overrides() {
        let config = StudioConfig::from_vars(vec![
            ("QRSTUDIO_SIZE", "256"),
            ("QRSTUDIO_CACHE_DIR", "/tmp/qr-cache"),
        ])
        .expect("config should load");
        assert_eq!(config.size, 256);
        assert_eq!(config.cache_dir, PathBuf::from("/tmp/qr-cache"));
    }

    #[test]
    fn test_unrelated_vars_are_ignored() {
        let config = StudioConfig::from_vars(vec![("HOME", "/root"), ("PATH", "/usr/bin")])
            .expect("config should load");
        assert_eq!(config.size, 512);
    }

    #[test]
    fn test_zero_size_rejected() {
        let result = StudioConfig::from_vars(vec![("QRSTUDIO_SIZE", "0")]);
        assert!(matches!(result, Err(ConfigError::ZeroSize)));
    }

    #[test]
    fn test_oversized_size_rejected() {
        let result = StudioConfig::from_vars(vec![("QRSTUDIO_SIZE", "200000")]);
        assert!(matches!(
            result,
            Err(ConfigError::SizeTooLarge {
                size: 200_000,
                max: 4096
            })
        ));
    }

    #[test]
    fn test_max_size_accepted() {
        let config = StudioConfig::from_vars(vec![("QRSTUDIO_SIZE", "4096")])
            .expect("config should load");
        assert_eq!(config.size, 4096);
    }

    #[test]
    fn test_invalid_size_rejected() {
        let result = StudioConfig::from_vars(vec![("QRSTUDIO_SIZE", "big")]);
        assert!(matches!(result, Err(ConfigError::Env(_))));
    }
}
