use crate::error::Result;
use std::io::Write;
use std::path::Path;

/// Emit the result
///
/// With no target the result goes to `out` followed by a newline.
/// Otherwise it replaces the contents of the target file, with no
/// trailing newline.
pub fn write_output<W: Write>(result: &str, target: Option<&Path>, out: &mut W) -> Result<()> {
    match target {
        None => {
            writeln!(out, "{}", result)?;
            out.flush()?;
        }
        Some(path) => {
            std::fs::write(path, result)?;
            log::debug!("wrote {} bytes to {}", result.len(), path.display());
        }
    }
    Ok(())
}
