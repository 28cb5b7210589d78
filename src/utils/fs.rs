use crate::error::{Result, SetupError};
use std::path::Path;

pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        std::fs::create_dir_all(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => SetupError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => SetupError::from(e),
        })?;
    }
    Ok(())
}

pub fn ensure_parent_exists(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }
    Ok(())
}

/// Moves `from` to `to`, creating the parent of `to` first.
pub fn move_file(from: &Path, to: &Path) -> Result<()> {
    ensure_parent_exists(to)?;

    if std::fs::rename(from, to).is_err() {
        // rename fails across filesystems
        std::fs::copy(from, to)?;
        std::fs::remove_file(from)?;
    }
    Ok(())
}

pub fn is_non_empty_dir(path: &Path) -> bool {
    std::fs::read_dir(path)
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false)
}
