//! Run configuration
//!
//! Built once from CLI input, immutable afterwards, passed explicitly into
//! the traversal. There is no process-wide state.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::model::{FileKind, WalkError};

/// Immutable configuration for one walk.
#[derive(Debug, Clone)]
pub struct WalkConfig {
    /// Recognized source extensions, leading dots stripped.
    pub sources: BTreeSet<String>,
    /// Recognized header extensions; `None` accepts any non-source extension.
    pub headers: Option<BTreeSet<String>>,
    /// Files pre-seeded into the visited set.
    pub ignore: Vec<PathBuf>,
    /// Canonical root against which all output paths are relativized.
    pub basepath: PathBuf,
    /// Emit headers in the result alongside sources.
    pub print_headers: bool,
}

impl WalkConfig {
    /// Build a config from raw CLI values. Canonicalizes the basepath and
    /// strips leading dots from extensions so `--sources .cc` and
    /// `--sources cc` mean the same thing.
    pub fn new(
        sources: &[String],
        headers: &[String],
        ignore: Vec<PathBuf>,
        basepath: &Path,
        print_headers: bool,
    ) -> Result<Self, WalkError> {
        let basepath = fs::canonicalize(basepath).map_err(|source| WalkError::Path {
            path: basepath.to_path_buf(),
            source,
        })?;

        let strip = |exts: &[String]| -> BTreeSet<String> {
            exts.iter()
                .map(|e| e.trim_start_matches('.').to_string())
                .collect()
        };

        Ok(Self {
            sources: strip(sources),
            headers: if headers.is_empty() {
                None
            } else {
                Some(strip(headers))
            },
            ignore,
            basepath,
            print_headers,
        })
    }

    /// Classify an extension (no leading dot, case-sensitive).
    ///
    /// The split is three-way on purpose: Rejected must short-circuit both
    /// emission and include-scanning, while Source and Header are both
    /// scanned for includes.
    pub fn classify(&self, ext: &str) -> FileKind {
        if self.sources.contains(ext) {
            FileKind::Source
        } else if self.headers.as_ref().map_or(true, |h| h.contains(ext)) {
            FileKind::Header
        } else {
            FileKind::Rejected
        }
    }
}
