use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Overrides the default config location when set.
pub const CONFIG_ENV_VAR: &str = "LINKMARK_CONFIG";

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

/// User settings for the `linkmark` command.
///
/// ```toml
/// notes_path = "~/notes"
///
/// [html]
/// title = "My notes"
/// stylesheet_path = "$HOME/.config/linkmark/print.css"
/// ```
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Folder scanned for documents that wikilinks resolve against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes_path: Option<PathBuf>,
    pub html: HtmlConfig,
}

/// Settings for the standalone HTML export.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replaces the built-in stylesheet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stylesheet_path: Option<PathBuf>,
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

        Self::parse(&content, config_path).map(Some)
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    fn parse(content: &str, config_path: &Path) -> Result<Self, ConfigError> {
        let mut config: Config =
            toml::from_str(content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in every configured path
        config.notes_path = config.notes_path.map(Self::expand_or_keep);
        config.html.stylesheet_path = config.html.stylesheet_path.map(Self::expand_or_keep);

        Ok(config)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        if let Some(custom) = std::env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
            return Self::expand_or_keep(PathBuf::from(custom));
        }
        let config_dir = shellexpand::tilde("~/.config/linkmark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_or_keep(path: PathBuf) -> PathBuf {
        Self::expand_path(&path).unwrap_or(path)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    fn sample() -> Config {
        Config {
            notes_path: Some(PathBuf::from("/tmp/test-notes")),
            html: HtmlConfig {
                title: Some("Notes".to_string()),
                stylesheet_path: Some(PathBuf::from("/tmp/print.css")),
            },
        }
    }

    #[test]
    fn test_config_path() {
        // Guard against LINKMARK_CONFIG leaking in from the environment
        if env::var_os(CONFIG_ENV_VAR).is_some() {
            return;
        }
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/linkmark/config.toml"));
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::parse("", Path::new("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_html_section_is_optional() {
        let config = Config::parse("notes_path = \"/srv/notes\"\n", Path::new("c.toml")).unwrap();
        assert_eq!(config.notes_path, Some(PathBuf::from("/srv/notes")));
        assert_eq!(config.html, HtmlConfig::default());
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let err = Config::parse("notes_path = [", Path::new("/etc/broken.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("/etc/broken.toml"));
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("LINKMARK_TEST_VAR", "/test/env/path");
        }

        let expanded = Config::expand_path(Path::new("$LINKMARK_TEST_VAR/subdir")).unwrap();
        assert_eq!(expanded, PathBuf::from("/test/env/path/subdir"));

        unsafe {
            env::remove_var("LINKMARK_TEST_VAR");
        }
    }

    #[test]
    fn test_unknown_variable_keeps_path() {
        let path = PathBuf::from("$LINKMARK_SURELY_UNSET_VAR/x");
        assert_eq!(Config::expand_or_keep(path.clone()), path);
    }

    #[test]
    fn test_relative_and_absolute_paths_unchanged() {
        for raw in ["/absolute/path", "relative/path"] {
            let path = PathBuf::from(raw);
            assert_eq!(Config::expand_path(&path).unwrap(), path);
        }
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = sample();

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_paths_in_toml_are_expanded() {
        unsafe {
            env::set_var("LINKMARK_NOTES_ROOT", "/custom/notes");
        }

        let config_content = r#"
notes_path = "$LINKMARK_NOTES_ROOT/my-notes"

[html]
stylesheet_path = "~/print.css"
"#;
        let config = Config::parse(config_content, Path::new("c.toml")).unwrap();

        assert_eq!(
            config.notes_path,
            Some(PathBuf::from("/custom/notes/my-notes"))
        );
        let css = config.html.stylesheet_path.unwrap();
        assert!(!css.to_string_lossy().starts_with('~'));
        assert!(css.to_string_lossy().ends_with("print.css"));

        unsafe {
            env::remove_var("LINKMARK_NOTES_ROOT");
        }
    }
}
