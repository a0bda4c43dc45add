use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{DivideError, Result};
use crate::logging::DEFAULT_FILTER;

pub const PROJECT_CONFIG: &str = ".divide.toml";
pub const LOG_ENV: &str = "DIVIDE_LOG";

/// Runtime settings. Only ambient concerns live here; nothing in this
/// struct may change what is printed on stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_FILTER.to_string(),
        }
    }
}

/// One config file on disk. Absent keys defer to the layer below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    log_level: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let global = match Self::global_path() {
            Some(path) => Self::read_file(&path)?,
            None => ConfigFile::default(),
        };
        let project = Self::read_file(Path::new(PROJECT_CONFIG))?;
        let merged = Self::merge(global, project);
        Ok(merged.with_env_overrides())
    }

    /// Defaults plus environment overrides, for when the files are unusable.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    fn global_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "divide")
            .map(|d| d.config_dir().join("config.toml"))
    }

    fn read_file(path: &Path) -> Result<ConfigFile> {
        if !path.exists() {
            return Ok(ConfigFile::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| DivideError::Config(format!("{}: {e}", path.display())))
    }

    fn merge(global: ConfigFile, project: ConfigFile) -> Self {
        let defaults = Self::default();
        Self {
            log_level: project
                .log_level
                .or(global.log_level)
                .unwrap_or(defaults.log_level),
        }
    }

    fn with_env_overrides(self) -> Self {
        self.apply_overrides(std::env::var(LOG_ENV).ok())
    }

    fn apply_overrides(mut self, log: Option<String>) -> Self {
        if let Some(filter) = log.filter(|f| !f.trim().is_empty()) {
            self.log_level = filter;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn file(log_level: Option<&str>) -> ConfigFile {
        ConfigFile {
            log_level: log_level.map(String::from),
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Config::default().log_level, "warn");
    }

    #[test]
    fn test_merge_project_wins() {
        let merged = Config::merge(file(Some("debug")), file(Some("info")));
        assert_eq!(merged.log_level, "info");

        let merged = Config::merge(file(Some("debug")), file(None));
        assert_eq!(merged.log_level, "debug");

        assert_eq!(Config::merge(file(None), file(None)), Config::default());
    }

    #[test]
    fn test_env_override() {
        let config = Config::default().apply_overrides(Some("divide=trace".to_string()));
        assert_eq!(config.log_level, "divide=trace");

        let config = config.apply_overrides(Some("  ".to_string()));
        assert_eq!(config.log_level, "divide=trace");

        let config = config.apply_overrides(None);
        assert_eq!(config.log_level, "divide=trace");
    }

    #[test]
    fn test_read_file_toml() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "log_level = \"debug\"").unwrap();

        let project = Config::read_file(tmp.path()).unwrap();
        assert_eq!(Config::merge(ConfigFile::default(), project).log_level, "debug");
    }

    #[test]
    fn test_missing_file_is_empty_layer() {
        let dir = tempfile::tempdir().unwrap();
        let layer = Config::read_file(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(layer, ConfigFile::default());
    }

    #[test]
    fn test_output_keys_are_rejected() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "output = \"json\"").unwrap();

        let err = Config::read_file(tmp.path()).unwrap_err();
        assert!(matches!(err, DivideError::Config(_)));
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "log_level = [").unwrap();

        assert!(matches!(
            Config::read_file(tmp.path()),
            Err(DivideError::Config(_))
        ));
    }
}
