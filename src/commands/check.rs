use crate::core::{
    catalog,
    config::Config,
    platform::{self, OsFamily},
};
use crate::error::Result;
use crate::utils::fs;
use std::io::Write;
use std::path::PathBuf;

/// First plugin location under the root that holds a file, in browser lookup
/// order.
pub fn find_installed_plugin(config: &Config) -> Option<PathBuf> {
    catalog::PLUGIN_CANDIDATES
        .iter()
        .map(|candidate| config.root.join(candidate))
        .find(|path| path.is_file())
}

/// Reports which resources are present under the setup root.
///
/// Returns the number of missing resources.
pub fn check_resources(config: &Config, family: &OsFamily, out: &mut dyn Write) -> Result<usize> {
    writeln!(out, "🔍 Minimalist Browser - Resource Check")?;
    writeln!(out)?;

    let mut missing = 0;

    writeln!(out, "🔌 Flash Plugin ({family}):")?;
    match (find_installed_plugin(config), platform::select_plugin(family)) {
        (Some(path), _) => {
            writeln!(out, "  {}", path.display())?;
            writeln!(out, "    ✅ found")?;
        }
        (None, Some(plugin)) => {
            writeln!(out, "  {}", config.get_resource_path(plugin).display())?;
            writeln!(out, "    ❌ missing")?;
            missing += 1;
        }
        (None, None) => writeln!(out, "  ⚠️  not available for this platform")?,
    }

    writeln!(out)?;

    writeln!(out, "🎮 Ruffle:")?;
    let ruffle_dir = config.get_resource_path(&catalog::RUFFLE);
    writeln!(out, "  {}", ruffle_dir.display())?;
    if fs::is_non_empty_dir(&ruffle_dir) {
        writeln!(out, "    ✅ found")?;
    } else {
        writeln!(out, "    ❌ missing")?;
        missing += 1;
    }

    writeln!(out)?;

    if missing == 0 {
        writeln!(out, "✅ All resources present")?;
    } else {
        writeln!(out, "❌ {missing} resource(s) missing")?;
        writeln!(out, "   Run 'browser-setup setup' to download them.")?;
    }

    Ok(missing)
}
