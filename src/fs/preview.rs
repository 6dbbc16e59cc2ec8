//! Text preview of a file
//!
//! Validates the file before reading it, checking for:
//! - existence and permissions
//! - size limit
//! - binary content

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use super::error::{FsError, IoResultExt};

/// Maximum size of a previewed file in bytes (2 MB)
pub const MAX_PREVIEW_SIZE: u64 = 2 * 1024 * 1024;

/// Number of leading bytes scanned for NUL
const BINARY_SNIFF_LEN: usize = 8192;

/// Check a file can be previewed without reading all of it
pub fn validate_for_preview(path: &Path) -> Result<(), FsError> {
    let metadata = fs::metadata(path).at(path)?;

    if metadata.is_dir() {
        return Err(FsError::IsDirectory(path.to_path_buf()));
    }

    if metadata.len() > MAX_PREVIEW_SIZE {
        return Err(FsError::TooLarge {
            path: path.to_path_buf(),
            size_mb: metadata.len() as f64 / (1024.0 * 1024.0),
        });
    }

    Ok(())
}

/// Check if a file is likely binary by scanning for null bytes
///
/// Returns `false` on any read error (let the actual read fail with a better error).
pub fn is_likely_binary(path: &Path) -> bool {
    let Ok(mut file) = File::open(path) else {
        return false;
    };

    let mut buffer = [0u8; BINARY_SNIFF_LEN];
    let Ok(bytes_read) = file.read(&mut buffer) else {
        return false;
    };

    buffer[..bytes_read].contains(&0)
}

/// Read a text file for the preview pane.
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub fn preview_file(path: &Path) -> Result<String, FsError> {
    validate_for_preview(path)?;
    if is_likely_binary(path) {
        return Err(FsError::BinaryFile(path.to_path_buf()));
    }
    let bytes = fs::read(path).at(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
