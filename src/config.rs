use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Optional file-based configuration; CLI flags take precedence.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SpoorthiConfig {
    pub database: Option<String>,
    pub port: Option<u16>,
    pub static_dir: Option<String>,
}

pub const DEFAULT_PORT: u16 = 3000;

pub fn default_config_path() -> PathBuf {
    PathBuf::from("spoorthi.toml")
}

pub fn default_database_path() -> PathBuf {
    PathBuf::from("spoorthi.db")
}

/// Where the built frontend lands
pub fn default_static_dir() -> PathBuf {
    PathBuf::from("dist")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<SpoorthiConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: SpoorthiConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spoorthi.toml");
        assert!(load_config(Some(&path)).unwrap().is_none());
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spoorthi.toml");
        std::fs::write(&path, "database = \"data/fest.db\"\nport = 8080\n").unwrap();

        let config = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(config.database.as_deref(), Some("data/fest.db"));
        assert_eq!(config.port, Some(8080));
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn test_ensure_db_dir_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("data").join("fest.db");

        ensure_db_dir(&db_path).unwrap();
        assert!(db_path.parent().unwrap().exists());
        // Second call is a no-op
        ensure_db_dir(&db_path).unwrap();
    }
}
