use crate::error::{Result, SetupError};
use crate::utils::{console::say, fs};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tar::Archive;
use zip::ZipArchive;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    Zip,
    TarGz,
}

impl ArchiveKind {
    /// Picks the format from a file name or URL suffix. Only `.zip` and
    /// `.tar.gz` are recognised.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.ends_with(".zip") {
            Some(ArchiveKind::Zip)
        } else if name.ends_with(".tar.gz") {
            Some(ArchiveKind::TarGz)
        } else {
            None
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.file_name()
            .and_then(|name| name.to_str())
            .and_then(Self::from_name)
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            ArchiveKind::Zip => ".zip",
            ArchiveKind::TarGz => ".tar.gz",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractOutcome {
    Extracted,
    /// The suffix is not a known archive format; nothing was touched.
    Unsupported,
    Failed(String),
}

impl ExtractOutcome {
    pub fn is_extracted(&self) -> bool {
        matches!(self, ExtractOutcome::Extracted)
    }
}

pub struct Extractor;

impl Default for Extractor {
    fn default() -> Self {
        Self
    }
}

impl Extractor {
    pub fn new() -> Self {
        Self
    }

    /// Expands `archive_path` into `destination` and removes the archive.
    ///
    /// Failures are reported to `out` and leave the archive in place.
    pub fn extract(
        &self,
        archive_path: &Path,
        destination: &Path,
        out: &mut dyn Write,
    ) -> ExtractOutcome {
        let Some(kind) = ArchiveKind::from_path(archive_path) else {
            return ExtractOutcome::Unsupported;
        };

        say(out, format_args!("Extracting {}...", archive_path.display()));

        match self.unpack(kind, archive_path, destination) {
            Ok(()) => {
                say(out, format_args!("Extracted to {}", destination.display()));
                if let Err(e) = std::fs::remove_file(archive_path) {
                    say(out, format_args!("Extraction failed: {e}"));
                    return ExtractOutcome::Failed(e.to_string());
                }
                ExtractOutcome::Extracted
            }
            Err(e) => {
                say(out, format_args!("Extraction failed: {e}"));
                ExtractOutcome::Failed(e.to_string())
            }
        }
    }

    fn unpack(&self, kind: ArchiveKind, archive_path: &Path, destination: &Path) -> Result<()> {
        fs::ensure_dir_exists(destination)?;

        match kind {
            ArchiveKind::Zip => self.extract_zip(archive_path, destination),
            ArchiveKind::TarGz => self.extract_tar_gz(archive_path, destination),
        }
    }

    fn extract_tar_gz(&self, archive_path: &Path, destination: &Path) -> Result<()> {
        let file = File::open(archive_path)?;
        let decoder = GzDecoder::new(file);
        let mut archive = Archive::new(decoder);
        archive
            .unpack(destination)
            .map_err(|e| SetupError::extraction_error(archive_path, e.to_string()))?;
        Ok(())
    }

    fn extract_zip(&self, archive_path: &Path, destination: &Path) -> Result<()> {
        let zip_err =
            |e: zip::result::ZipError| SetupError::extraction_error(archive_path, e.to_string());

        let file = File::open(archive_path)?;
        let mut archive = ZipArchive::new(file).map_err(zip_err)?;

        for i in 0..archive.len() {
            let mut entry = archive.by_index(i).map_err(zip_err)?;
            let outpath = match entry.enclosed_name() {
                Some(path) => destination.join(path),
                None => continue,
            };

            if entry.is_dir() {
                fs::ensure_dir_exists(&outpath)?;
            } else {
                fs::ensure_parent_exists(&outpath)?;
                let mut outfile = File::create(&outpath)?;
                std::io::copy(&mut entry, &mut outfile)?;
            }

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Some(mode) = entry.unix_mode() {
                    std::fs::set_permissions(&outpath, std::fs::Permissions::from_mode(mode))?;
                }
            }
        }
        Ok(())
    }
}
