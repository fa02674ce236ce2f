//! Reading command scripts from disk.

use std::fs;

use log::debug;

use crate::error::{Error, Result};

/// Reads a script file to run as a single batch.
///
/// Shell expansions like `~` are resolved in `script_path`. A missing final
/// newline is tolerated, and a leading byte order mark is dropped so the
/// first command is not misread.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid UTF-8.
pub fn read_script(script_path: &str) -> Result<String> {
    let expanded = shellexpand::tilde(script_path).to_string();
    debug!("Reading script from `{expanded}`");

    let contents = fs::read_to_string(&expanded)
        .map_err(|e| Error::io_error("script".to_string(), expanded.clone(), e))?;

    let contents = contents.strip_prefix('\u{feff}').unwrap_or(&contents);
    let mut script = contents.to_string();
    if !script.ends_with('\n') {
        script.push('\n');
    }

    Ok(script)
}
