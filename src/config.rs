use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::database::{get_database_url, DEFAULT_DATABASE};

pub const DEFAULT_PORT: u16 = 3001;

/// Server settings, optionally read from a YAML file.
///
/// ```yaml
/// port: 3001
/// database: postgres://postgres@localhost:5432/ValuebudsDB
/// cors_origin: http://localhost:3000
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub port: u16,
    /// Connection URL or SQLite file path
    pub database: String,
    pub cors_origin: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database: get_database_url(Some(DEFAULT_DATABASE)),
            cors_origin: None,
        }
    }
}

/// Values given on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub port: Option<u16>,
    pub database: Option<String>,
    pub cors_origin: Option<String>,
}

impl CatalogConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config = serde_yaml::from_str(content)?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Defaults, then the optional file, then explicit overrides.
    pub fn resolve(file: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let base = match file {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(base.apply(overrides))
    }

    pub fn apply(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(database) = overrides.database {
            self.database = database;
        }
        if overrides.cors_origin.is_some() {
            self.cors_origin = overrides.cors_origin;
        }
        self
    }

    pub fn database_url(&self) -> String {
        get_database_url(Some(&self.database))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.port, 3001);
        assert_eq!(config.database, "sqlite://catalog.db?mode=rwc");
        assert_eq!(config.database_url(), "sqlite://catalog.db?mode=rwc");
        assert!(config.cors_origin.is_none());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = CatalogConfig::from_yaml_str("port: 8080\n").unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.database, CatalogConfig::default().database);

        let config = CatalogConfig::from_yaml_str("").unwrap();
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn test_invalid_yaml_is_rejected() {
        assert!(CatalogConfig::from_yaml_str("port: not-a-number\n").is_err());
    }

    #[test]
    fn test_overrides_win_over_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "port: 4000\ndatabase: data/catalog.db\ncors_origin: http://localhost:3000"
        )
        .unwrap();

        let config = CatalogConfig::resolve(
            Some(file.path()),
            ConfigOverrides {
                port: Some(5000),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(config.port, 5000);
        assert_eq!(config.database, "data/catalog.db");
        assert_eq!(config.database_url(), "sqlite://data/catalog.db?mode=rwc");
        assert_eq!(config.cors_origin.as_deref(), Some("http://localhost:3000"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = CatalogConfig::resolve(
            Some(Path::new("/nonexistent/catalog.yaml")),
            ConfigOverrides::default(),
        );
        assert!(result.is_err());
    }
}
