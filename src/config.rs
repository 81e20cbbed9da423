use std::path::{Path, PathBuf};
use thiserror::Error;

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Color only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }

    pub fn enabled(&self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid value '{value}' for '{key}' in {path} (line {line})")]
    InvalidValue {
        path: PathBuf,
        line: usize,
        key: String,
        value: String,
    },
}

/// Settings loaded from the `rc` file
///
/// The file holds `key=value` lines; blank lines and `#` comments are
/// skipped. Recognized keys:
///
/// - `color=auto|always|never`
/// - `width=<columns>` overrides the detected terminal width
///
/// A missing file yields the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub color: ColorMode,
    pub width: Option<usize>,
}

impl Config {
    /// Directory holding the rc file
    pub fn config_dir() -> PathBuf {
        let home = dirs::home_dir()
            .or_else(|| std::env::var_os("HOME").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."));
        home.join(".service-studio")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("rc")
    }

    /// Load the rc file from the default location
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse rc content; `path` is only used in error messages
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                log::warn!("ignoring malformed line {} in {}: {}", idx + 1, path.display(), line);
                continue;
            };
            let (key, value) = (key.trim(), value.trim());
            let invalid = || ConfigError::InvalidValue {
                path: path.to_path_buf(),
                line: idx + 1,
                key: key.to_string(),
                value: value.to_string(),
            };

            match key {
                "color" => {
                    config.color = ColorMode::from_str(value).ok_or_else(invalid)?;
                }
                "width" => {
                    let width = value.parse::<usize>().map_err(|_| invalid())?;
                    if width == 0 {
                        return Err(invalid());
                    }
                    config.width = Some(width);
                }
                _ => {
                    log::warn!("ignoring unknown config key '{}' in {}", key, path.display());
                }
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn parse(content: &str) -> Result<Config, ConfigError> {
        Config::parse(content, Path::new("rc"))
    }

    #[test]
    fn test_config_path() {
        let path = Config::config_path();
        assert!(path.to_string_lossy().contains(".service-studio"));
        assert!(path.ends_with("rc"));
    }

    #[test]
    fn test_parse_keys() {
        let config = parse("# comment\n\ncolor=always\nwidth = 90\n").unwrap();
        assert_eq!(config.color, ColorMode::Always);
        assert_eq!(config.width, Some(90));
    }

    #[test]
    fn test_parse_ignores_unknown_and_malformed() {
        let config = parse("theme=dark\nnot a pair\ncolor=never\n").unwrap();
        assert_eq!(config, Config { color: ColorMode::Never, width: None });
    }

    #[test]
    fn test_parse_invalid_values() {
        let err = parse("color=sometimes\n").unwrap_err();
        assert!(err.to_string().contains("sometimes"));
        assert!(err.to_string().contains("line 1"));
        assert!(parse("width=wide").is_err());
        assert!(parse("width=0").is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("rc")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("rc");
        fs::write(&config_file, "color=never\n").unwrap();
        assert_eq!(Config::load_from(&config_file).unwrap().color, ColorMode::Never);
    }

    #[test]
    fn test_color_mode_enabled() {
        assert!(ColorMode::Auto.enabled(true));
        assert!(!ColorMode::Auto.enabled(false));
        assert!(ColorMode::Always.enabled(false));
        assert!(!ColorMode::Never.enabled(true));
    }
}
