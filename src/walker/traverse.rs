//! Worklist driver
//!
//! The traversal itself: pop, normalize, dedup, classify, discover sibling
//! sources, scan for includes, repeat until the worklist drains. LIFO order
//! (`Vec::pop`), matching the historical tool; result order is traversal
//! order, not a contract.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use crate::core::config::WalkConfig;
use crate::core::model::{FileKind, WalkEntry, WalkError};
use crate::core::paths::{normalize, FilePath};
use crate::walker::includes::parse_includes;
use crate::walker::resolve::resolve_include;

/// Walk the inclusion graph from `start_files` and return the accepted
/// files in discovery order, duplicates excluded.
///
/// Aborts on the first unresolved quoted include; the caller gets no
/// partial result.
pub fn walk(config: &WalkConfig, start_files: &[PathBuf]) -> Result<Vec<WalkEntry>, WalkError> {
    let mut pending: Vec<PathBuf> = start_files.to_vec();
    let mut visited: HashSet<PathBuf> = HashSet::new();
    let mut result: Vec<WalkEntry> = Vec::new();

    // Ignored files count as already processed.
    for path in &config.ignore {
        let file = normalize(path, &config.basepath)?;
        log::debug!("ignoring {}", file.rel_str());
        visited.insert(file.rel);
    }

    while let Some(path) = pending.pop() {
        let file = normalize(&path, &config.basepath)?;
        if !visited.insert(file.rel.clone()) {
            continue;
        }

        match config.classify(file.extension()) {
            FileKind::Rejected => {
                // Stays visited, but is neither emitted nor scanned.
                log::debug!("rejected {}", file.rel_str());
                continue;
            }
            FileKind::Source => {
                log::debug!("source {}", file.rel_str());
                result.push(WalkEntry::new(file.rel_str(), FileKind::Source));
            }
            FileKind::Header => {
                log::debug!("header {}", file.rel_str());
                if config.print_headers {
                    result.push(WalkEntry::new(file.rel_str(), FileKind::Header));
                }
                pending.extend(sibling_sources(&file, config));
            }
        }

        let text = fs::read_to_string(&file.abs).map_err(|source| WalkError::Read {
            path: file.abs.clone(),
            source,
        })?;
        for inc in parse_includes(&text) {
            pending.push(resolve_include(&inc, &file)?);
        }
    }

    Ok(result)
}

/// Candidate implementation files for a header: same directory and stem,
/// each recognized source extension in turn. Nothing includes these, so the
/// walk has to probe for them.
fn sibling_sources(header: &FilePath, config: &WalkConfig) -> Vec<PathBuf> {
    config
        .sources
        .iter()
        .filter_map(|ext| {
            let candidate = header.abs.with_extension(ext);
            candidate.is_file().then_some(candidate)
        })
        .collect()
}
