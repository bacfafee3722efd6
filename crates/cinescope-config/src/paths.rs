use anyhow::Result;
use std::path::{Path, PathBuf};

/// Base path override, used by containers and tests
pub fn base_path_override() -> Option<PathBuf> {
    std::env::var("CINESCOPE_BASE_PATH").ok().map(PathBuf::from)
}

pub struct PathManager {
    config_dir: PathBuf,
    data_dir: PathBuf,
    log_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("cinescope");

        Ok(Self::from_base(base_dir))
    }

    /// Config files at the base level, data and logs in subdirectories
    pub fn from_base(base: PathBuf) -> Self {
        Self {
            config_dir: base.clone(),
            data_dir: base.join("data"),
            log_dir: base.join("logs"),
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Durable key/value blob holding the watchlist and recent searches
    pub fn storage_file(&self) -> PathBuf {
        self.data_dir.join("storage.json")
    }

    /// Relative log paths from the config live under the logs directory
    pub fn resolve_log_file(&self, configured: &Path) -> PathBuf {
        if configured.is_absolute() {
            configured.to_path_buf()
        } else {
            self.log_dir.join(configured)
        }
    }
}

impl Default for PathManager {
    fn default() -> Self {
        if let Some(base) = base_path_override() {
            return Self::from_base(base);
        }

        // Platform-specific paths (e.g., ~/.config/cinescope on Linux)
        Self::new().unwrap_or_else(|_| Self::from_base(PathBuf::from(".cinescope")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_under_base() {
        let paths = PathManager::from_base(PathBuf::from("/srv/cinescope"));
        assert_eq!(paths.config_file(), PathBuf::from("/srv/cinescope/config.toml"));
        assert_eq!(paths.storage_file(), PathBuf::from("/srv/cinescope/data/storage.json"));
    }

    #[test]
    fn test_relative_log_file_goes_under_logs_dir() {
        let paths = PathManager::from_base(PathBuf::from("/srv/cinescope"));
        assert_eq!(
            paths.resolve_log_file(Path::new("cinescope.log")),
            PathBuf::from("/srv/cinescope/logs/cinescope.log")
        );
        assert_eq!(
            paths.resolve_log_file(Path::new("/var/log/cinescope.log")),
            PathBuf::from("/var/log/cinescope.log")
        );
    }
}
