use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extensions accepted whatever the configuration says.
pub const DEFAULT_EXTENSIONS: [&str; 2] = ["tex", "cls"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Extra file extensions to accept, with or without the leading dot.
    pub extensions: Vec<String>,
    /// Keep `range` and `loc` in printed trees.
    pub location: bool,
    /// Keep `raw` in printed trees.
    pub raw: bool,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config.extensions = config
            .extensions
            .iter()
            .map(|ext| Self::normalize_extension(ext))
            .filter(|ext| !ext.is_empty())
            .collect();

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/latex2tast");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Whether `path` has an extension the CLI should parse.
    pub fn accepts(&self, path: &Path) -> bool {
        let Some(ext) = path.extension() else {
            return false;
        };
        let ext = Self::normalize_extension(&ext.to_string_lossy());
        DEFAULT_EXTENSIONS.contains(&ext.as_str()) || self.extensions.contains(&ext)
    }

    fn normalize_extension(ext: &str) -> String {
        ext.trim().trim_start_matches('.').to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/latex2tast/config.toml"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            extensions: vec!["sty".into()],
            location: true,
            raw: false,
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_missing_fields_default() {
        let config: Config = toml::from_str("raw = true\n").unwrap();

        assert_eq!(
            config,
            Config {
                extensions: vec![],
                location: false,
                raw: true,
            }
        );
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_write_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        let test_config = Config {
            extensions: vec!["ltx".into()],
            location: true,
            raw: true,
        };

        std::fs::write(&config_file, toml::to_string(&test_config).unwrap()).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_load_normalizes_extensions() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "extensions = [\".STY\", \"ltx\", \"\"]\n").unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(config.extensions, ["sty", "ltx"]);
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "location = \"yes\"\n").unwrap();

        let error = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(error, ConfigError::ConfigParseError { .. }));
        assert!(error.to_string().starts_with("Failed to parse config file at"));
    }

    #[test]
    fn test_accepts_default_and_configured_extensions() {
        let config = Config {
            extensions: vec!["sty".into()],
            ..Config::default()
        };

        assert!(config.accepts(Path::new("paper.tex")));
        assert!(config.accepts(Path::new("PAPER.TEX")));
        assert!(config.accepts(Path::new("class.cls")));
        assert!(config.accepts(Path::new("macros.sty")));
        assert!(!config.accepts(Path::new("notes.md")));
        assert!(!config.accepts(Path::new("Makefile")));
        assert!(!Config::default().accepts(Path::new("macros.sty")));
    }
}
