use crate::core::catalog::ResourceDescriptor;
use crate::core::extract::ArchiveKind;
use std::path::{Path, PathBuf};

const TEMP_DOWNLOAD_NAME: &str = "temp_flash_download";
const EMULATOR_ARCHIVE_NAME: &str = "ruffle.zip";

/// Where a setup run reads and writes, resolved from a root directory.
#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Config {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Config { root: root.into() }
    }

    pub fn get_plugins_dir(&self) -> PathBuf {
        self.root.join("plugins")
    }

    /// Fixed temporary name for a plugin download. Archive suffixes are kept
    /// so the extractor can recognise the format.
    pub fn get_temp_download_path(&self, resource: &ResourceDescriptor) -> PathBuf {
        let suffix = ArchiveKind::from_name(resource.url)
            .map(|kind| kind.suffix())
            .unwrap_or("");
        self.root.join(format!("{TEMP_DOWNLOAD_NAME}{suffix}"))
    }

    pub fn get_emulator_archive_path(&self) -> PathBuf {
        self.root.join(EMULATOR_ARCHIVE_NAME)
    }

    pub fn get_resource_path(&self, resource: &ResourceDescriptor) -> PathBuf {
        self.root.join(Path::new(resource.path))
    }
}
