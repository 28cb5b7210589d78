/// A downloadable third-party resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDescriptor {
    pub id: &'static str,
    pub url: &'static str,
    /// Destination relative to the setup root. For archives this is the
    /// directory the contents land in.
    pub path: &'static str,
    pub extract: bool,
}

pub const FLASH_WINDOWS: ResourceDescriptor = ResourceDescriptor {
    id: "flash_windows",
    url: "https://fpdownload.macromedia.com/pub/flashplayer/updaters/32/flashplayer_32_sa.exe",
    path: "plugins/pepflashplayer32_32_0_0_465.dll",
    extract: false,
};

pub const FLASH_LINUX: ResourceDescriptor = ResourceDescriptor {
    id: "flash_linux",
    url: "https://archive.org/download/flashplayerarchive/pub/flashplayer/installers/archive/fp_32.0.0.465_archive/flashplayer32_0r0_465_linux.x86_64.tar.gz",
    path: "plugins/libpepflashplayer.so",
    extract: true,
};

pub const RUFFLE: ResourceDescriptor = ResourceDescriptor {
    id: "ruffle",
    url: "https://github.com/ruffle-rs/ruffle/releases/latest/download/ruffle_web_demo.zip",
    path: "assets/ruffle",
    extract: true,
};

pub const RESOURCES: [ResourceDescriptor; 3] = [FLASH_WINDOWS, FLASH_LINUX, RUFFLE];

/// Links printed at the end of a run for manual downloads.
pub const FALLBACK_LINKS: [(&str, &str); 3] = [
    ("Flash Archive", "https://archive.org/details/flashplayerarchive"),
    ("Ruffle Releases", "https://github.com/ruffle-rs/ruffle/releases"),
    ("WebView2", "https://developer.microsoft.com/en-us/microsoft-edge/webview2/"),
];

/// Locations the browser loads a Flash plugin from, in lookup order.
pub const PLUGIN_CANDIDATES: [&str; 3] = [
    "plugins/pepflashplayer32_32_0_0_465.dll",
    "plugins/pepflashplayer.dll",
    "plugins/libpepflashplayer.so",
];
