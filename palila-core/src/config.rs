//! Configuration parsing and management.

use crate::builder::{BuildOptions, FailurePolicy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("folder does not exist: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("file does not exist: {}", .0.display())]
    NotAFile(PathBuf),
}

/// Build settings, usually read from `palila.yml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Site root scanned for `index.md` files
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Page template shared by every page
    #[serde(default)]
    pub template: Option<PathBuf>,

    /// Keep building other folders after one fails
    #[serde(default)]
    pub keep_going: bool,

    // Internal: path to config file (for relative path resolution)
    #[serde(skip)]
    config_path: Option<PathBuf>,
}

/// Root and template checked to exist, as absolute paths.
#[derive(Debug, Clone)]
pub struct ResolvedPaths {
    pub root: PathBuf,
    pub template: PathBuf,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&contents)?;

        // Store config file path for relative path resolution
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Site root, resolved relative to the config file
    pub fn root_dir(&self) -> Option<PathBuf> {
        self.root.as_ref().map(|p| self.resolve_path(p))
    }

    /// Template file, resolved relative to the config file
    pub fn template_file(&self) -> Option<PathBuf> {
        self.template.as_ref().map(|p| self.resolve_path(p))
    }

    /// Overlay command-line values. Config-file paths are resolved first so
    /// overrides stay relative to the working directory.
    pub fn with_overrides(
        &self,
        root: Option<PathBuf>,
        template: Option<PathBuf>,
        keep_going: bool,
    ) -> Config {
        Config {
            root: root.or_else(|| self.root_dir()),
            template: template.or_else(|| self.template_file()),
            keep_going: keep_going || self.keep_going,
            config_path: None,
        }
    }

    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            failure_policy: if self.keep_going {
                FailurePolicy::Continue
            } else {
                FailurePolicy::Abort
            },
        }
    }

    /// Check the root is a folder and the template a file, returning both
    /// canonicalized.
    pub fn validate(&self) -> Result<ResolvedPaths, ConfigError> {
        let root = self
            .root_dir()
            .ok_or_else(|| ConfigError::MissingField("root".to_string()))?;
        let template = self
            .template_file()
            .ok_or_else(|| ConfigError::MissingField("template".to_string()))?;

        Ok(ResolvedPaths {
            root: existing_dir(&root)?,
            template: existing_file(&template)?,
        })
    }

    /// Resolve a path relative to the config file location
    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else if let Some(parent) = self.config_path.as_ref().and_then(|p| p.parent()) {
            parent.join(path)
        } else {
            path.to_path_buf()
        }
    }
}

/// Canonical path of an existing directory.
pub fn existing_dir(path: &Path) -> Result<PathBuf, ConfigError> {
    if !path.is_dir() {
        return Err(ConfigError::NotADirectory(path.to_path_buf()));
    }
    Ok(path.canonicalize()?)
}

/// Canonical path of an existing file.
pub fn existing_file(path: &Path) -> Result<PathBuf, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::NotAFile(path.to_path_buf()));
    }
    Ok(path.canonicalize()?)
}
