use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::height::formatter::HeightStyle;

/// Looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "clinorm.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // How the standardized report is written
    #[serde(default)]
    pub report: ReportConfig,

    // Interactive prompt behaviour
    #[serde(default)]
    pub shell: ShellConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    #[serde(default = "default_weight_decimals")]
    pub weight_decimals: usize,

    #[serde(default)]
    pub height_style: HeightStyle,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            weight_decimals: default_weight_decimals(),
            height_style: HeightStyle::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShellConfig {
    // Any of these, typed at a prompt, ends the session
    #[serde(default = "default_quit_words")]
    pub quit_words: Vec<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            quit_words: default_quit_words(),
        }
    }
}

fn default_weight_decimals() -> usize {
    2
}

fn default_quit_words() -> Vec<String> {
    vec!["q".to_string(), "quit".to_string(), "exit".to_string()]
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Explicit path if given, else `clinorm.toml` in the working directory
    /// if present, else defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config");
            return Self::load_from_file(path);
        }

        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            debug!(path = DEFAULT_CONFIG_FILE, "loading config from working directory");
            Self::load_from_file(default_path)
        } else {
            Ok(Self::empty())
        }
    }

    pub fn is_quit_word(&self, input: &str) -> bool {
        let input = input.trim();
        self.shell
            .quit_words
            .iter()
            .any(|word| word.eq_ignore_ascii_case(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::empty();
        assert_eq!(config.report.weight_decimals, 2);
        assert_eq!(config.report.height_style, HeightStyle::Compact);
        assert!(config.is_quit_word("q"));
        assert!(config.is_quit_word(" QUIT "));
        assert!(config.is_quit_word("Exit"));
        assert!(!config.is_quit_word("70kg"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
[report]
height_style = "verbose"
"#,
        )
        .unwrap();
        assert_eq!(config.report.height_style, HeightStyle::Verbose);
        assert_eq!(config.report.weight_decimals, 2);
        assert_eq!(config.shell.quit_words.len(), 3);
    }

    #[test]
    fn test_custom_quit_words() {
        let config: Config = toml::from_str(
            r#"
[shell]
quit_words = ["stop", "salir"]
"#,
        )
        .unwrap();
        assert!(config.is_quit_word("SALIR"));
        assert!(!config.is_quit_word("q"));
    }

    #[test]
    fn test_bad_style_is_parse_error() {
        let result: Result<Config, _> = toml::from_str("[report]\nheight_style = \"metric\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load_from_file("/nonexistent/clinorm.toml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("clinorm-test-{}.toml", std::process::id()));
        std::fs::write(&path, "[report]\nweight_decimals = 1\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.report.weight_decimals, 1);

        std::fs::remove_file(&path).unwrap();
    }
}
