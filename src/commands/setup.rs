use crate::core::{
    catalog::{self, ResourceDescriptor},
    config::Config,
    download::{Downloader, Transport},
    extract::Extractor,
    platform::{self, OsFamily},
};
use crate::error::Result;
use crate::utils::fs;
use std::io::Write;

pub fn print_banner(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "=================================")?;
    writeln!(out, "Minimalist Browser Resource Setup")?;
    writeln!(out, "=================================")?;
    Ok(())
}

/// Runs the full setup: platform plugin first, then the emulator bundle.
///
/// Individual download or extraction failures are reported and skipped; only
/// filesystem errors outside those steps are returned.
pub fn run_setup<T: Transport>(
    config: &Config,
    family: &OsFamily,
    downloader: &Downloader<T>,
    out: &mut dyn Write,
) -> Result<()> {
    print_banner(out)?;

    let extractor = Extractor::new();

    match platform::select_plugin(family) {
        Some(plugin) => install_plugin(config, plugin, downloader, &extractor, out)?,
        None => writeln!(out, "Flash not available for {family}")?,
    }

    let ruffle = &catalog::RUFFLE;
    let archive = config.get_emulator_archive_path();
    if downloader.fetch(ruffle.url, &archive, out).succeeded {
        extractor.extract(&archive, &config.get_resource_path(ruffle), out);
    }

    writeln!(out)?;
    writeln!(out, "Setup complete!")?;
    writeln!(out, "Important links for manual downloads:")?;
    for (label, url) in catalog::FALLBACK_LINKS {
        writeln!(out, "- {label}: {url}")?;
    }

    Ok(())
}

fn install_plugin<T: Transport>(
    config: &Config,
    plugin: &ResourceDescriptor,
    downloader: &Downloader<T>,
    extractor: &Extractor,
    out: &mut dyn Write,
) -> Result<()> {
    let temp_file = config.get_temp_download_path(plugin);

    if !downloader.fetch(plugin.url, &temp_file, out).succeeded {
        return Ok(());
    }

    if plugin.extract {
        extractor.extract(&temp_file, &config.get_plugins_dir(), out);
    } else {
        fs::move_file(&temp_file, &config.get_resource_path(plugin))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::download::testing::MockTransport;
    use crate::core::extract::fixtures::{tar_gz_bytes, zip_bytes};
    use crate::error::SetupError;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn ruffle_zip() -> Vec<u8> {
        zip_bytes(&[("index.html", "<html>"), ("ruffle.js", "js")])
    }

    fn run(root: &TempDir, family: OsFamily, transport: MockTransport) -> String {
        let config = Config::new(root.path());
        let downloader = Downloader::new(transport);
        let mut out: Vec<u8> = Vec::new();
        run_setup(&config, &family, &downloader, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_linux_end_to_end() {
        let root = TempDir::new().unwrap();
        let transport = MockTransport::new()
            .with_body(
                catalog::FLASH_LINUX.url,
                tar_gz_bytes(&[("libpepflashplayer.so", "elf"), ("license.txt", "eula")]),
            )
            .with_body(catalog::RUFFLE.url, ruffle_zip());

        let log = run(&root, OsFamily::Linux, transport);

        let plugins = root.path().join("plugins");
        assert_eq!(
            std::fs::read(plugins.join("libpepflashplayer.so")).unwrap(),
            b"elf"
        );
        assert!(plugins.join("license.txt").exists());
        assert!(!root.path().join("temp_flash_download.tar.gz").exists());

        let ruffle = root.path().join("assets").join("ruffle");
        assert_eq!(std::fs::read(ruffle.join("index.html")).unwrap(), b"<html>");
        assert!(ruffle.join("ruffle.js").exists());
        assert!(!root.path().join("ruffle.zip").exists());

        let banner = "=================================\nMinimalist Browser Resource Setup\n";
        assert!(log.starts_with(banner));
        let lines: Vec<&str> = log.lines().collect();
        assert_eq!(
            &lines[lines.len() - 6..],
            &[
                "",
                "Setup complete!",
                "Important links for manual downloads:",
                "- Flash Archive: https://archive.org/details/flashplayerarchive",
                "- Ruffle Releases: https://github.com/ruffle-rs/ruffle/releases",
                "- WebView2: https://developer.microsoft.com/en-us/microsoft-edge/webview2/",
            ]
        );
    }

    #[test]
    fn test_windows_plugin_is_renamed_into_place() {
        let root = TempDir::new().unwrap();
        let transport = MockTransport::new()
            .with_body(catalog::FLASH_WINDOWS.url, b"MZ plugin".to_vec())
            .with_body(catalog::RUFFLE.url, ruffle_zip());

        run(&root, OsFamily::Windows, transport);

        let plugin = root.path().join("plugins/pepflashplayer32_32_0_0_465.dll");
        assert_eq!(std::fs::read(plugin).unwrap(), b"MZ plugin");
        assert!(!root.path().join("temp_flash_download").exists());
    }

    #[test]
    fn test_other_platform_skips_plugin() {
        let root = TempDir::new().unwrap();
        let transport = MockTransport::new().with_body(catalog::RUFFLE.url, ruffle_zip());

        let log = run(&root, OsFamily::from_name("macos"), transport);

        assert!(log.contains("Flash not available for macos"));
        assert!(!root.path().join("plugins").exists());
        assert!(root.path().join("assets/ruffle/index.html").exists());
    }

    #[test]
    fn test_failed_fetches_skip_extraction_and_finish() {
        let root = TempDir::new().unwrap();
        let transport = MockTransport::new()
            .with_network_error(catalog::FLASH_LINUX.url)
            .with_status(catalog::RUFFLE.url, 503);

        let log = run(&root, OsFamily::Linux, transport);

        assert_eq!(log.matches("Download failed:").count(), 2);
        assert!(!log.contains("Extracting"));
        assert!(!root.path().join("plugins").exists());
        assert!(!root.path().join("assets").exists());
        assert!(log.contains("Setup complete!"));
    }

    #[test]
    fn test_corrupt_emulator_archive_is_kept() {
        let root = TempDir::new().unwrap();
        let transport =
            MockTransport::new().with_body(catalog::RUFFLE.url, b"not a zip".to_vec());

        let log = run(&root, OsFamily::from_name("freebsd"), transport);

        assert!(log.contains("Extraction failed:"));
        assert!(root.path().join("ruffle.zip").exists());
        assert!(log.contains("Setup complete!"));
    }

    #[test]
    fn test_blocked_plugins_dir_stops_the_run() {
        let root = TempDir::new().unwrap();
        std::fs::write(root.path().join("plugins"), b"not a directory").unwrap();
        let transport = MockTransport::new()
            .with_body(catalog::FLASH_WINDOWS.url, b"MZ plugin".to_vec())
            .with_body(catalog::RUFFLE.url, ruffle_zip());
        let config = Config::new(root.path());
        let downloader = Downloader::new(transport);

        let mut out: Vec<u8> = Vec::new();
        let result = run_setup(&config, &OsFamily::Windows, &downloader, &mut out);

        let err = result.unwrap_err();
        assert!(matches!(err, SetupError::Io(_) | SetupError::PermissionDenied { .. }));
        let log = String::from_utf8(out).unwrap();
        assert!(!log.contains("Setup complete!"));
        assert!(!root.path().join("assets").exists());
    }
}
