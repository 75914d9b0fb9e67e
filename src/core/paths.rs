//! Path normalization
//!
//! Every path entering the visited set or the result list goes through
//! [`normalize`] exactly once: resolve against the filesystem first
//! (symlinks, `.` and `..`), then relativize against the basepath. Two
//! spellings of the same file always normalize to the same identity;
//! skipping the resolve step is how duplicate visits sneak in.

use pathdiff::diff_paths;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::model::WalkError;

/// A file identity for the walk: the resolved absolute path (used for I/O)
/// and its form relative to the basepath (used for dedup and display).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilePath {
    pub abs: PathBuf,
    pub rel: PathBuf,
}

impl FilePath {
    /// Relative form as a string, for diagnostics and output.
    pub fn rel_str(&self) -> String {
        self.rel.to_string_lossy().into_owned()
    }

    /// Extension without the leading dot; empty string if there is none.
    pub fn extension(&self) -> &str {
        self.rel.extension().and_then(|e| e.to_str()).unwrap_or("")
    }
}

/// Canonicalize `path` and compute its form relative to `base`.
///
/// `base` must already be canonical (the config canonicalizes it once at
/// startup), so relativization cannot fail; paths outside the basepath come
/// out `..`-prefixed. A path that does not exist is a [`WalkError::Path`].
pub fn normalize(path: &Path, base: &Path) -> Result<FilePath, WalkError> {
    let abs = fs::canonicalize(path).map_err(|source| WalkError::Path {
        path: path.to_path_buf(),
        source,
    })?;
    let rel = diff_paths(&abs, base).unwrap_or_else(|| abs.clone());
    Ok(FilePath { abs, rel })
}
