use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::PathBuf;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and overriding configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Destination directory for converted files; output sits next to each
    /// source file when unset
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Extension given to converted files, including the dot
    #[serde(default = "default_output_extension")]
    pub output_extension: String,

    /// What to do when one file in a batch fails to convert
    #[serde(default)]
    pub on_error: ErrorPolicy,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Batch failure policy
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    // @policy: Log the failing file and keep converting the rest
    #[default]
    Skip,
    // @policy: Stop the whole batch at the first failure
    Abort,
}

impl ErrorPolicy {
    // @returns: Lowercase policy identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Skip => "skip".to_string(),
            Self::Abort => "abort".to_string(),
        }
    }
}

// Implement Display trait for ErrorPolicy
impl std::fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for ErrorPolicy
impl std::str::FromStr for ErrorPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "abort" => Ok(Self::Abort),
            _ => Err(anyhow!("Invalid error policy: {}", s)),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl Config {
    /// Validate the configuration after loading and overriding
    pub fn validate(&self) -> Result<()> {
        if !self.output_extension.starts_with('.') || self.output_extension.len() < 2 {
            return Err(anyhow!(
                "Output extension must start with a dot and name a format: {}",
                self.output_extension
            ));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: None,
            output_extension: default_output_extension(),
            on_error: ErrorPolicy::default(),
            log_level: LogLevel::default(),
        }
    }
}

fn default_output_extension() -> String {
    ".txt".to_string()
}
