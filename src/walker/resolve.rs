//! Include resolver
//!
//! A quoted include is always resolved against the including file's own
//! directory; there is no include-path search. A candidate that is not a
//! regular file is fatal for the whole walk.

use std::path::{Path, PathBuf};

use crate::core::model::WalkError;
use crate::core::paths::FilePath;
use crate::walker::includes::IncludeRef;

/// Resolve a directive found in `from` to a worklist candidate.
///
/// Returns the unnormalized candidate path (the driver normalizes on pop).
/// [`WalkError::HeaderNotFound`] carries the header name as written, the
/// including file's normalized path, and the 1-based line number.
pub fn resolve_include(inc: &IncludeRef, from: &FilePath) -> Result<PathBuf, WalkError> {
    let dir = from.abs.parent().unwrap_or_else(|| Path::new(""));
    let candidate = dir.join(&inc.name);

    if !candidate.is_file() {
        return Err(WalkError::HeaderNotFound {
            header: inc.name.clone(),
            file: from.rel_str(),
            line: inc.line,
        });
    }
    Ok(candidate)
}
