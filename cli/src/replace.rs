// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use tracing::debug;

/// Returns `path` with `.{extension}` appended to its file name.
pub fn sibling_path(path: &Path, extension: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

/// Replaces the contents of `path` with `data`.
///
/// With a backup extension, the current file is first moved to `<path>.<extension>`, overwriting
/// any previous backup. Without one, `data` is written to a temporary sibling which is then
/// renamed over `path`. Returns the backup path if one was made.
pub fn replace_with_backup(
    path: &Path,
    data: &[u8],
    backup_extension: Option<&str>,
) -> anyhow::Result<Option<PathBuf>> {
    match backup_extension {
        Some(extension) => {
            let backup = sibling_path(path, extension);
            if backup.exists() {
                fs::remove_file(&backup).with_context(|| {
                    format!("Failed to remove old backup '{}'", backup.display())
                })?;
            }
            fs::rename(path, &backup).with_context(|| {
                format!(
                    "Failed to back up '{}' to '{}'",
                    path.display(),
                    backup.display(),
                )
            })?;
            debug!("Backed up {} to {}", path.display(), backup.display());

            fs::write(path, data)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;

            Ok(Some(backup))
        }
        None => {
            let temp = sibling_path(path, "tmp");
            fs::write(&temp, data)
                .with_context(|| format!("Failed to write '{}'", temp.display()))?;
            fs::rename(&temp, path)
                .with_context(|| format!("Failed to replace '{}'", path.display()))?;

            Ok(None)
        }
    }
}
