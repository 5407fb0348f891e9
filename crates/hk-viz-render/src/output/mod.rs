#[cfg(feature = "png")]
pub mod png;

use std::path::PathBuf;

/// Write rendered bytes to `<name>.<extension>` and return the path.
pub fn save_with_extension(
    bytes: &[u8],
    name: &str,
    extension: &str,
) -> crate::Result<PathBuf> {
    let path = PathBuf::from(format!("{name}.{extension}"));
    std::fs::write(&path, bytes)?;
    Ok(path)
}
