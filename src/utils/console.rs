use std::fmt::Display;
use std::io::Write;

/// Writes one status line to `out`. A closed or broken sink is ignored.
pub fn say(out: &mut dyn Write, line: impl Display) {
    let _ = writeln!(out, "{line}");
}
