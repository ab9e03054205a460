use std::io;
use std::path::{Path, PathBuf};

use crate::error::ResultOkLogExt;

/// Error that occurs when checking whether a path exists fails.
#[derive(Debug, thiserror::Error)]
#[error("failed to check if path `{path}` exists: {source}")]
pub struct ExistenceCheckError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Error that occurs when listing a directory fails.
#[derive(Debug, thiserror::Error)]
#[error("failed to read directory `{path}`: {source}")]
pub struct ReadDirError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Returns whether a path exists.
///
/// Broken symlinks count as missing.
///
/// # Errors
///
/// Returns an [`ExistenceCheckError`] if the existence can't be determined, e.g., because of
/// missing permissions on a parent directory.
pub fn path_exists(path: impl AsRef<Path>) -> Result<bool, ExistenceCheckError> {
    let path = path.as_ref();
    path.try_exists().map_err(|source| ExistenceCheckError {
        path: path.to_path_buf(),
        source,
    })
}

/// Returns the file names of all entries in a directory, sorted.
///
/// Entries that can't be read or whose name isn't valid UTF-8 are logged and skipped.
///
/// # Errors
///
/// Returns a [`ReadDirError`] if the directory itself can't be read.
///
/// # Example
/// ```no_run
/// # use drud_local::fsutil;
/// let names = fsutil::read_dir_names("/home/user/.drud/legacy")?;
/// # Ok::<(), fsutil::ReadDirError>(())
/// ```
pub fn read_dir_names(path: impl AsRef<Path>) -> Result<Vec<String>, ReadDirError> {
    let path = path.as_ref();
    let entries = std::fs::read_dir(path).map_err(|source| ReadDirError {
        path: path.to_path_buf(),
        source,
    })?;

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok_log())
        .filter_map(|entry| match entry.file_name().into_string() {
            Ok(name) => Some(name),
            Err(raw) => {
                log::warn!("Skipping non UTF-8 entry {:?} in `{}`", raw, path.display());
                None
            }
        })
        .collect();
    names.sort();

    Ok(names)
}
