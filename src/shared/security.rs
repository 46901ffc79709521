use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum document size accepted on load (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that `path` is a regular file and not a symbolic link.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
/// Saves replace the document by renaming a temp file over it, which would
/// silently turn a symlinked document into a plain file; rejecting links up
/// front keeps reads and writes consistent.
///
/// # Errors
/// Returns an error if metadata cannot be read, the path is a symbolic link,
/// or the path is not a regular file
pub fn validate_regular_file(path: &Path) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| SbomError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read file metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(SbomError::SecurityError {
            path: path.to_path_buf(),
            reason: "The sbom file is a symbolic link".to_string(),
            hint: "Point --file at the real document instead of a link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(SbomError::FileReadError {
            path: path.to_path_buf(),
            details: "Not a regular file".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds `max_size`
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(SbomError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes",
                file_size, max_size
            ),
            hint: "An sbom document this large is almost certainly not one written by this tool"
                .to_string(),
        }
        .into());
    }
    Ok(())
}
