//! Shared helpers for the external-tool backends.

use doc2md_core::{ConvertError, Result};
use std::path::Path;
use std::process::Command;

/// Lowercased file extension without the leading dot.
///
/// A path with no extension yields the empty string, which never matches a
/// priority-table entry or a backend extension list.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default()
}

/// Whether the path's extension is in the given list (entries lowercase).
pub fn supports_extension(path: &Path, extensions: &[&str]) -> bool {
    let ext = extension_of(path);
    extensions.contains(&ext.as_str())
}

/// Check that `binary` resolves on `PATH`.
///
/// # Errors
/// Returns a `ToolError` carrying the install hint when the binary is not
/// found.
pub fn probe_binary(binary: &str, install_hint: &str) -> Result<()> {
    which::which(binary)
        .map(|_| ())
        .map_err(|_| ConvertError::ToolError(format!("{binary} not found on PATH. {install_hint}")))
}

/// Run a prepared command and capture stdout as UTF-8.
///
/// # Errors
/// Returns a `ToolError` if the binary is missing or exits non-zero (the
/// error carries trimmed stderr), or an `IoError` for other spawn failures.
pub fn run_capture(command: &mut Command, tool: &str) -> Result<String> {
    let output = command.output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConvertError::ToolError(format!("{tool} command not found"))
        } else {
            ConvertError::IoError(e)
        }
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ConvertError::ToolError(format!(
            "{tool} failed: {}",
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
