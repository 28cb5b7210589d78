use crate::core::catalog;
use crate::error::Result;
use std::io::Write;

pub fn list_resources(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Known resources:")?;
    for resource in &catalog::RESOURCES {
        writeln!(out)?;
        writeln!(out, "  {}", resource.id)?;
        writeln!(out, "    url:     {}", resource.url)?;
        writeln!(out, "    path:    {}", resource.path)?;
        writeln!(
            out,
            "    extract: {}",
            if resource.extract { "yes" } else { "no" }
        )?;
    }
    Ok(())
}
