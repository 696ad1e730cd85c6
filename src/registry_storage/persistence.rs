//! Registry persistence: render and save with atomic writes

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::error::{RegistryError, Result};
use crate::models::PostRecord;

const INDENT: &[u8] = b"    ";
const TEMP_SUFFIX: &str = ".tmp";

/// Serialize records as a pretty-printed JSON array
pub fn render_registry(registry: &[PostRecord]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    registry.serialize(&mut serializer)?;
    Ok(buf)
}

/// Write the registry to `output`, replacing any existing file
///
/// # Errors
///
/// Returns [`RegistryError::Serialize`] if the records cannot be encoded and
/// [`RegistryError::WriteOutput`] if the temp file cannot be written or renamed (for
/// example when the parent directory does not exist).
pub fn write_registry(output: &Path, registry: &[PostRecord]) -> Result<()> {
    let write_err =
        |source: io::Error| RegistryError::WriteOutput { path: output.to_path_buf(), source };

    let json = render_registry(registry)?;
    let temp_path = temp_path_for(output).ok_or_else(|| {
        write_err(io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name"))
    })?;

    // A partial write or failed rename must not leave the temp file behind
    let written = fs::write(&temp_path, json).and_then(|()| fs::rename(&temp_path, output));
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(write_err(e));
    }

    Ok(())
}

fn temp_path_for(output: &Path) -> Option<PathBuf> {
    let mut name = output.file_name()?.to_os_string();
    name.push(TEMP_SUFFIX);
    Some(output.with_file_name(name))
}
