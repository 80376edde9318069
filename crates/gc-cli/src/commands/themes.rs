//! List the built-in themes.

use std::io::Write;

use anyhow::Result;
use gc_core::ThemeName;

pub fn run<W: Write>(writer: &mut W) -> Result<()> {
    for theme in ThemeName::ALL {
        let aliases = theme.aliases();
        if aliases.is_empty() {
            writeln!(writer, "{theme}")?;
        } else {
            writeln!(writer, "{theme} ({})", aliases.join(", "))?;
        }
    }
    Ok(())
}
