//! Shebang-based file discovery.
//!
//! This module centralizes file discovery so the gate only processes files
//! that actually declare a matching interpreter on their first line, while
//! respecting repository ignore rules and configured glob filters. The file
//! extension is never consulted: the shebang is the sole discriminator.

use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use tracing::{debug, info, warn};

use crate::core::config::DiscoveryConfig;
use crate::core::errors::{LintgateError, Result};

/// Longest shebang line prefix inspected when sniffing a file.
const MAX_SHEBANG_LEN: usize = 256;

/// Discover scripts under `root` whose first line is a shebang naming the
/// configured interpreter.
///
/// Returns paths relative to `root`, in traversal enumeration order, with
/// no path listed twice. Unreadable files are skipped.
pub fn discover_scripts(root: &Path, config: &DiscoveryConfig) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(LintgateError::discovery_at(
            "discovery root is not a directory",
            root.display().to_string(),
        ));
    }

    let include_glob = compile_globset(&config.include_patterns)?;
    let exclude_glob = compile_globset(&with_default_excludes(&config.exclude_patterns))?;

    let mut unique = HashSet::new();
    let mut collected = Vec::new();

    let walker = WalkBuilder::new(root)
        .standard_filters(true)
        .git_ignore(config.respect_gitignore)
        .git_global(config.respect_gitignore)
        .git_exclude(config.respect_gitignore)
        .hidden(false)
        .build();

    for entry in walker {
        let dir_entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Failed to walk directory: {err}");
                continue;
            }
        };

        let is_file = dir_entry
            .file_type()
            .map(|ft| ft.is_file())
            .unwrap_or(false);
        if !is_file {
            continue;
        }

        let path = dir_entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);

        if !should_keep(
            path,
            relative,
            include_glob.as_ref(),
            exclude_glob.as_ref(),
            config.max_file_size_bytes,
        ) {
            continue;
        }

        if has_interpreter_shebang(path, &config.interpreter_pattern) {
            add_unique(&mut unique, &mut collected, relative.to_path_buf());
        }
    }

    log_discovery_results(&collected);
    Ok(collected)
}

/// Returns true when the first line of `path` is a `#!` line containing
/// `pattern`.
///
/// Only the first line is inspected; a file whose shebang appears later is
/// never selected. Files that cannot be opened or read are skipped.
pub fn has_interpreter_shebang(path: &Path, pattern: &str) -> bool {
    let mut file = match fs::File::open(path) {
        Ok(file) => file,
        Err(err) => {
            debug!("Skipping unreadable file {}: {err}", path.display());
            return false;
        }
    };

    let mut buf = [0u8; MAX_SHEBANG_LEN];
    let read = match file.read(&mut buf) {
        Ok(read) => read,
        Err(err) => {
            debug!("Skipping unreadable file {}: {err}", path.display());
            return false;
        }
    };

    let head = &buf[..read];
    if !head.starts_with(b"#!") {
        return false;
    }

    let line = match head.iter().position(|&byte| byte == b'\n') {
        Some(newline) => &head[..newline],
        None => head,
    };

    String::from_utf8_lossy(line)
        .trim_end_matches('\r')
        .contains(pattern)
}

/// Compile glob patterns into a matcher, skipping blank entries.
pub(crate) fn compile_globset(patterns: &[String]) -> Result<Option<GlobSet>> {
    let mut builder = GlobSetBuilder::new();
    let mut added = false;

    for pattern in patterns {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            continue;
        }

        let glob = GlobBuilder::new(pattern)
            .literal_separator(false)
            .build()
            .map_err(|err| {
                LintgateError::config(format!("Invalid glob pattern '{pattern}': {err}"))
            })?;
        builder.add(glob);
        added = true;
    }

    if added {
        builder
            .build()
            .map(Some)
            .map_err(|err| LintgateError::config(format!("Failed to build glob set: {err}")))
    } else {
        Ok(None)
    }
}

/// Exclusions applied on top of any user-configured patterns.
fn default_exclude_patterns() -> Vec<String> {
    vec![
        "**/.git/**".to_string(),
        "**/__pycache__/**".to_string(),
        "**/node_modules/**".to_string(),
        "**/target/**".to_string(),
        "**/.venv/**".to_string(),
        "**/venv/**".to_string(),
        "**/.tox/**".to_string(),
    ]
}

fn with_default_excludes(configured: &[String]) -> Vec<String> {
    let mut patterns = configured.to_vec();
    patterns.extend(default_exclude_patterns());
    patterns.sort();
    patterns.dedup();
    patterns
}

fn should_keep(
    path: &Path,
    relative: &Path,
    include_glob: Option<&GlobSet>,
    exclude_glob: Option<&GlobSet>,
    max_file_size_bytes: u64,
) -> bool {
    // 0 means unlimited
    if max_file_size_bytes > 0 {
        if let Ok(metadata) = fs::metadata(path) {
            if metadata.len() > max_file_size_bytes {
                return false;
            }
        }
    }

    if let Some(exclude) = exclude_glob {
        if exclude.is_match(relative) {
            return false;
        }
    }

    if let Some(include) = include_glob {
        include.is_match(relative)
    } else {
        true
    }
}

/// Add a path to the collection if not already present.
fn add_unique(unique: &mut HashSet<PathBuf>, collected: &mut Vec<PathBuf>, path: PathBuf) {
    if unique.insert(path.clone()) {
        collected.push(path);
    }
}

fn log_discovery_results(collected: &[PathBuf]) {
    info!(
        "File discovery completed: {} scripts selected for linting",
        collected.len()
    );
}
