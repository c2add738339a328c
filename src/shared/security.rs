use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Upper bound for a saved `npm ls` listing (256 MB).
///
/// Listings of large monorepos run to tens of megabytes; anything far beyond
/// that is treated as hostile input rather than parsed into memory.
pub const MAX_LISTING_SIZE: u64 = 256 * 1024 * 1024;

/// Rejects symbolic links at `path`.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
/// A path that does not exist is not an error here; callers that need the
/// file to exist check that separately.
pub fn reject_symlink(path: &Path, operation: &str) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        ),
        Ok(_) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )),
    }
}

/// Reads a regular, non-symlinked file of bounded size into a string.
///
/// # Arguments
/// * `path` - File to read
/// * `description` - Human-readable name used in error messages (e.g. "dependency listing")
/// * `max_size` - Maximum accepted size in bytes
///
/// # Errors
/// Returns an error if the path is missing, a symlink, not a regular file,
/// larger than `max_size`, or not valid UTF-8.
pub fn read_regular_file(path: &Path, description: &str, max_size: u64) -> Result<String> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            metadata.len(),
            max_size
        );
    }

    fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", description, e))
}
