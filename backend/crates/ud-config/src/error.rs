use std::fmt::Display;
use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    /// A setting holds a value the service cannot run with
    #[error("Invalid {key}: {message} {location}")]
    Invalid {
        key: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Environment error: {message} {location}")]
    Environment {
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn invalid<S: Into<String>>(key: &'static str, message: S) -> Self {
        ConfigError::Invalid {
            key,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn environment<S: Into<String>>(message: S) -> Self {
        ConfigError::Environment {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Reject `value` unless `min <= value <= max`
    #[track_caller]
    pub(crate) fn check_range<T>(key: &'static str, value: T, min: T, max: T) -> ConfigErrorResult<()>
    where
        T: PartialOrd + Display,
    {
        if value < min || value > max {
            return Err(ConfigError::invalid(
                key,
                format!("must be {}-{}, got {}", min, max, value),
            ));
        }
        Ok(())
    }

    /// Config key this error refers to, if any
    pub fn key(&self) -> Option<&'static str> {
        match self {
            ConfigError::Invalid { key, .. } => Some(key),
            _ => None,
        }
    }
}

pub type ConfigErrorResult<T> = std::result::Result<T, ConfigError>;
