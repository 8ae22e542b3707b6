//! Configuration system
//!
//! Settings files are TOML or RON, picked by file extension. Every load and
//! save goes through [`Config::validate`], so a file that parses but carries
//! unusable tuning never reaches the engine and is never written out.

use std::path::Path;

pub use serde::{Serialize, Deserialize};

/// On-disk settings formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.ron`
    Ron,
}

impl ConfigFormat {
    /// Pick the format from a path's extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Deserialize `contents` in this format
    pub fn parse<T: for<'de> Deserialize<'de>>(self, contents: &str) -> Result<T, ConfigError> {
        match self {
            Self::Toml => toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Self::Ron => ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Serialize `value` in this format
    pub fn render<T: Serialize>(self, value: &T) -> Result<String, ConfigError> {
        match self {
            Self::Toml => toml::to_string_pretty(value).map_err(|e| ConfigError::Serialize(e.to_string())),
            Self::Ron => ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string())),
        }
    }
}

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Reject values that parse but cannot be used
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Parse and validate configuration text
    fn from_str_with_format(contents: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        let config: Self = format.parse(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate and serialize configuration
    fn to_string_with_format(&self, format: ConfigFormat) -> Result<String, ConfigError> {
        self.validate()?;
        format.render(self)
    }

    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path)?;
        Self::from_str_with_format(&contents, format)
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = self.to_string_with_format(ConfigFormat::from_path(path)?)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A value parsed but is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct Sensitivity {
        gain: f32,
    }

    impl Config for Sensitivity {
        fn validate(&self) -> Result<(), ConfigError> {
            if self.gain < 0.0 {
                return Err(ConfigError::Invalid(format!("gain {} is negative", self.gain)));
            }
            Ok(())
        }
    }

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tilt_engine_{}_{name}", std::process::id()))
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("tilt.toml")).unwrap(), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("dir/Tilt.RON")).unwrap(), ConfigFormat::Ron);
        assert!(matches!(
            ConfigFormat::from_path(Path::new("tilt")),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_parse_rejects_invalid_values() {
        let result = Sensitivity::from_str_with_format("gain = -1.0", ConfigFormat::Toml);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_save_and_load_through_file() {
        for name in ["settings.toml", "settings.ron"] {
            let path = scratch_path(name);
            let saved = Sensitivity { gain: 1.5 };

            saved.save_to_file(&path).unwrap();
            let loaded = Sensitivity::load_from_file(&path).unwrap();
            std::fs::remove_file(&path).unwrap();

            assert_eq!(loaded, saved);
        }
    }

    #[test]
    fn test_invalid_config_is_not_written() {
        let path = scratch_path("rejected.toml");
        let result = Sensitivity { gain: -2.0 }.save_to_file(&path);

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Sensitivity::load_from_file(scratch_path("missing.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
