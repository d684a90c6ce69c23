use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

use crate::errors::{CipherError, Result};

pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| CipherError::io(path, e))
}

/// Replace the contents of `path` with `content`.
///
/// Data goes to a temporary file next to the destination which is then
/// renamed over it. A failed write leaves the destination untouched.
/// An existing destination keeps its permissions, and a symlinked
/// destination is written through to the file it points at.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let parent_dir = match target.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let existing = fs::metadata(&target).ok().map(|meta| meta.permissions());

    let mut temp_file = new_temp_file(parent_dir).map_err(|e| CipherError::io(parent_dir, e))?;
    if let Some(permissions) = existing {
        temp_file
            .as_file()
            .set_permissions(permissions)
            .map_err(|e| CipherError::io(path, e))?;
    }
    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| CipherError::io(path, e))?;

    temp_file
        .persist(&target)
        .map_err(|e| CipherError::io(path, e.error))?;
    Ok(())
}

/// Temp file with the mode a plain create would give: 0o666 less the umask.
#[cfg(unix)]
fn new_temp_file(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    tempfile::Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn new_temp_file(dir: &Path) -> io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}
