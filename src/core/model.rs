//! Core data model
//!
//! The walk error taxonomy, the three-way extension classification, and the
//! entries accumulated into the result list.

use serde::Serialize;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while building the inclusion graph.
///
/// `HeaderNotFound` is the fatal, user-facing one: a quoted include named a
/// file that does not exist. The triple it carries (header as written,
/// including file, 1-based line) is the whole diagnostic.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("Header {header} not found at {file}:{line}")]
    HeaderNotFound {
        /// Header name exactly as written between the quotes.
        header: String,
        /// Normalized path of the file containing the directive.
        file: String,
        /// 1-based line number of the directive.
        line: usize,
    },

    #[error("failed to resolve path {path}")]
    Path {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WalkError {
    /// Process exit status for this error. Missing headers get their own
    /// code so callers can tell a broken include graph from a bad invocation.
    pub fn exit_code(&self) -> i32 {
        match self {
            WalkError::HeaderNotFound { .. } => 1,
            _ => 2,
        }
    }
}

/// How a file's extension classifies it for the walk.
///
/// Rejected files are marked visited but neither emitted nor scanned for
/// includes; Source and Header files are always scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Source,
    Header,
    Rejected,
}

/// One accepted file in the result list.
#[derive(Debug, Clone, Serialize)]
pub struct WalkEntry {
    /// Path relative to the basepath.
    pub path: String,
    pub kind: FileKind,
}

impl WalkEntry {
    pub fn new(path: impl Into<String>, kind: FileKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}
