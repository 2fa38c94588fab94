// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Name of the settings file looked up in the working directory
pub const FILE_NAME: &str = "syncmap.toml";

#[derive(Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub regions: RegionsConfig,
    pub backup: BackupConfig,
}

#[derive(Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct RegionsConfig {
    /// File listing the enabled region IDs, one per line, or `-` for stdin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct BackupConfig {
    pub enabled: bool,
    pub extension: String,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            extension: "bak".to_owned(),
        }
    }
}

impl BackupConfig {
    /// Returns the backup extension to use, or `None` if backups are disabled.
    pub fn extension(&self) -> Option<&str> {
        self.enabled.then_some(self.extension.as_str())
    }
}

/// Loads the settings at `path`, first writing the defaults there if the file doesn't exist.
pub fn load_or_create(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        let content =
            toml::to_string_pretty(&Config::default()).context("Failed to serialize settings")?;
        fs::write(path, content).with_context(|| {
            format!("Failed to create settings file '{}'", path.display())
        })?;
        info!("Created default settings at {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file '{}'", path.display()))?;

    toml::from_str(&content)
        .with_context(|| format!("Settings file '{}' is invalid", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();

        assert_eq!(config.regions.source, None);
        assert_eq!(config.backup.extension(), Some("bak"));
    }

    #[test]
    fn partial_file_uses_defaults() {
        let config: Config = toml::from_str("[regions]\nsource = \"regions.txt\"\n").unwrap();

        assert_eq!(config.regions.source, Some(PathBuf::from("regions.txt")));
        assert_eq!(config.backup, BackupConfig::default());
    }

    #[test]
    fn disabled_backup_has_no_extension() {
        let config: Config = toml::from_str("[backup]\nenabled = false\n").unwrap();

        assert_eq!(config.backup.extension(), None);
    }

    #[test]
    fn missing_file_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);

        let config = load_or_create(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config, Config::default());
        assert_eq!(load_or_create(&path).unwrap(), config);
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "backup = 3").unwrap();

        assert!(load_or_create(&path).is_err());
    }
}
