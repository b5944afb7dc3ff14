//! Configuration types for cast-edit.
//!
//! Settings are layered: built-in defaults, then a TOML file, then
//! `CAST_EDIT_*` environment variables. Command line flags are applied on
//! top by the binary.

pub mod env;
pub mod file;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigError;

pub use env::EnvConfig;
use env::vars;
pub use file::ConfigLoader;

/// Default number of decimal places written for timestamps.
pub const DEFAULT_PRECISION: u32 = 6;

/// Largest accepted timestamp precision.
pub const MAX_PRECISION: u32 = 9;

/// Default log level filter.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditConfig {
    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Output file configuration.
    pub output: OutputConfig,
}

impl EditConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration: defaults, then `path` (or `cast-edit.toml` from
    /// the default search paths), then the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(path, &EnvConfig::default(), &ConfigOverrides::default())
    }

    /// Load configuration with `overrides` applied last.
    ///
    /// The environment is not consulted for a setting that `overrides`
    /// provides, and the result is checked once every layer is applied.
    pub fn load_with(
        path: Option<&Path>,
        env: &EnvConfig,
        overrides: &ConfigOverrides,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => ConfigLoader::new().load(path)?,
            None => ConfigLoader::with_default_paths()
                .load_default()?
                .unwrap_or_default(),
        };
        config.apply_env(env, overrides)?;
        config.apply_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides and re-check the result.
    pub fn with_env(mut self, env: &EnvConfig) -> Result<Self, ConfigError> {
        self.apply_env(env, &ConfigOverrides::default())?;
        self.validate()?;
        Ok(self)
    }

    fn apply_env(
        &mut self,
        env: &EnvConfig,
        overrides: &ConfigOverrides,
    ) -> Result<(), ConfigError> {
        if overrides.log_level.is_none() {
            if let Some(level) = env.get(vars::LOG_LEVEL) {
                self.logging.level = level;
            }
        }
        if overrides.log_format.is_none() {
            if let Some(format) = env.get(vars::LOG_FORMAT) {
                self.logging.format = format.parse()?;
            }
        }
        if overrides.precision.is_none() {
            if let Some(precision) = env.get(vars::PRECISION) {
                self.output.precision = precision.trim().parse().map_err(|_| {
                    ConfigError::invalid_value(
                        env.var_name(vars::PRECISION),
                        &precision,
                        "expected a whole number",
                    )
                })?;
            }
        }
        Ok(())
    }

    fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.log_level {
            self.logging.level.clone_from(level);
        }
        if let Some(format) = overrides.log_format {
            self.logging.format = format;
        }
        if let Some(precision) = overrides.precision {
            self.output.precision = precision;
        }
    }

    /// Set the log level filter.
    #[must_use]
    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    /// Set the log format.
    #[must_use]
    pub const fn log_format(mut self, format: LogFormat) -> Self {
        self.logging.format = format;
        self
    }

    /// Set the timestamp precision.
    #[must_use]
    pub const fn precision(mut self, precision: u32) -> Self {
        self.output.precision = precision;
        self
    }

    /// Check that every setting is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.precision > MAX_PRECISION {
            return Err(ConfigError::invalid_value(
                "output.precision",
                self.output.precision.to_string(),
                format!("must be at most {MAX_PRECISION}"),
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::invalid_value(
                "logging.level",
                &self.logging.level,
                "must not be empty",
            ));
        }
        Ok(())
    }
}

/// Settings given on the command line, applied over every other layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Log level filter.
    pub log_level: Option<String>,
    /// Log format.
    pub log_format: Option<LogFormat>,
    /// Timestamp precision.
    pub precision: Option<u32>,
}

/// Configuration for logging.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Level filter, in `tracing_subscriber::EnvFilter` syntax.
    pub level: String,

    /// Log format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::default(),
        }
    }
}

/// Log format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human friendly.
    Pretty,

    /// Single-line text.
    #[default]
    Compact,

    /// Newline-delimited JSON.
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" | "text" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::invalid_value(
                "logging.format",
                s,
                "expected one of pretty, compact, json",
            )),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pretty => "pretty",
            Self::Compact => "compact",
            Self::Json => "json",
        })
    }
}

/// Configuration for written recordings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Decimal places kept on timestamps.
    pub precision: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EditConfig::new();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, LogFormat::Compact);
        assert_eq!(config.output.precision, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_setters() {
        let config = EditConfig::new()
            .log_level("debug")
            .log_format(LogFormat::Json)
            .precision(3);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.output.precision, 3);
    }

    #[test]
    fn precision_limit() {
        let err = EditConfig::new().precision(12).validate().unwrap_err();
        assert!(err.to_string().contains("output.precision"));
    }

    #[test]
    fn log_format_parsing() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert!("xml".parse::<LogFormat>().is_err());
        assert_eq!(LogFormat::Pretty.to_string(), "pretty");
    }

    #[test]
    fn env_overrides() {
        let env = EnvConfig::new("T")
            .with_var("LOG_LEVEL", "trace")
            .with_var("LOG_FORMAT", "pretty")
            .with_var("PRECISION", "3");
        let config = EditConfig::new().with_env(&env).unwrap();
        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.output.precision, 3);
    }

    #[test]
    fn overrides_win_over_bad_env() {
        let env = EnvConfig::new("CAST_EDIT_TEST_OVERRIDES")
            .with_var("PRECISION", "15")
            .with_var("LOG_FORMAT", "xml");
        let overrides = ConfigOverrides {
            log_format: Some(LogFormat::Json),
            precision: Some(3),
            ..ConfigOverrides::default()
        };
        let mut config = EditConfig::new();
        config.apply_env(&env, &overrides).unwrap();
        config.apply_overrides(&overrides);
        assert!(config.validate().is_ok());
        assert_eq!(config.output.precision, 3);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn bad_override_is_still_rejected() {
        let overrides = ConfigOverrides {
            precision: Some(12),
            ..ConfigOverrides::default()
        };
        let mut config = EditConfig::new();
        config.apply_overrides(&overrides);
        assert!(config.validate().is_err());
    }

    #[test]
    fn env_bad_precision() {
        let env = EnvConfig::new("T").with_var("PRECISION", "six");
        let err = EditConfig::new().with_env(&env).unwrap_err();
        assert!(err.to_string().contains("T_PRECISION"));
    }
}
