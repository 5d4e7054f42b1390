// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Log file enumeration and batch parsing
//!
//! Each command-line entry is either a plain path or a glob pattern. Every
//! matched file is parsed on its own, so one unreadable log does not stop the
//! rest of the batch.

use std::path::{Component, Path, PathBuf};

use globset::GlobBuilder;
use ompvv_log::{LogError, TestResult, parse_file};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::ReportError;

const GLOB_META: &[char] = &['*', '?', '[', '{'];

/// Results of parsing a set of log files
#[derive(Debug, Default)]
pub struct Batch {
    /// Records from every file that parsed, in file order
    pub results: Vec<TestResult>,
    /// Number of files parsed successfully
    pub files_parsed: usize,
    /// Files that could not be parsed
    pub failures: Vec<(PathBuf, LogError)>,
}

impl Batch {
    /// Check if every file parsed
    #[must_use]
    pub fn all_parsed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Expand one command-line entry into the files it names
///
/// An entry without glob metacharacters is returned as-is, whether or not it
/// exists. A pattern is matched against the files below its longest literal
/// directory prefix; `*` does not cross `/` and the matches come back sorted.
/// Symbolic links are followed, and hidden files and directories only match
/// components that name them with a leading `.`.
///
/// # Errors
///
/// Returns `ReportError::Pattern` if the pattern is not a valid glob.
pub fn expand_pattern(pattern: &str) -> Result<Vec<PathBuf>, ReportError> {
    if !pattern.contains(GLOB_META) {
        return Ok(vec![PathBuf::from(pattern)]);
    }

    let matcher = GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()?
        .compile_matcher();

    let root = literal_prefix(pattern);
    let walk_root = if root.as_os_str().is_empty() {
        Path::new(".")
    } else {
        root.as_path()
    };

    let recursive = pattern.contains("**");
    let parts: Vec<String> = Path::new(pattern)
        .components()
        .skip(root.components().count())
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect();

    let mut walker = WalkDir::new(walk_root)
        .follow_links(true)
        .sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(parts.len());
    }

    let mut matches = Vec::new();
    let entries = walker
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || visible(entry, &parts, recursive));
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(pattern, error = %e, "Skipping unreadable path while expanding pattern");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = if root.as_os_str().is_empty() {
            entry.path().strip_prefix(".").unwrap_or(entry.path())
        } else {
            entry.path()
        };
        if matcher.is_match(path) {
            matches.push(path.to_path_buf());
        }
    }

    debug!(pattern, count = matches.len(), "Expanded log file pattern");
    Ok(matches)
}

/// Hidden names only match a pattern component that itself starts with `.`
///
/// `parts` are the pattern components below the walk root. Below a `**` the
/// position is unknown, so any dot-led component in the pattern admits them.
fn visible(entry: &DirEntry, parts: &[String], recursive: bool) -> bool {
    if !entry.file_name().to_string_lossy().starts_with('.') {
        return true;
    }
    if recursive {
        parts.iter().any(|part| part.starts_with('.'))
    } else {
        parts
            .get(entry.depth() - 1)
            .is_some_and(|part| part.starts_with('.'))
    }
}

/// Leading components of `pattern` that contain no glob metacharacters
fn literal_prefix(pattern: &str) -> PathBuf {
    let mut prefix = PathBuf::new();
    for component in Path::new(pattern).components() {
        let literal = match component {
            Component::Normal(part) => !part.to_string_lossy().contains(GLOB_META),
            _ => true,
        };
        if !literal {
            break;
        }
        prefix.push(component);
    }
    prefix
}

/// Expand every pattern and parse each matched file
///
/// # Errors
///
/// Returns `ReportError::Pattern` if a pattern is invalid. Per-file parse
/// errors are collected in [`Batch::failures`] instead.
pub fn collect_results<S: AsRef<str>>(patterns: &[S]) -> Result<Batch, ReportError> {
    let mut batch = Batch::default();

    for pattern in patterns {
        let pattern = pattern.as_ref();
        let files = expand_pattern(pattern)?;
        if files.is_empty() {
            warn!(pattern, "Pattern matched no log files");
        }

        for path in files {
            match parse_file(&path) {
                Ok(results) => {
                    debug!(path = %path.display(), count = results.len(), "Collected results");
                    batch.results.extend(results);
                    batch.files_parsed += 1;
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to parse log file");
                    batch.failures.push((path, e));
                }
            }
        }
    }

    info!(
        files = batch.files_parsed,
        failed = batch.failures.len(),
        results = batch.results.len(),
        "Log collection complete"
    );
    Ok(batch)
}
