use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::{Pattern, glob};
use walkdir::WalkDir;

/// File extension of disassembled listings.
pub const LISTING_EXTENSION: &str = "smali";

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning for listing files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Listing paths in sorted order.
    pub files: Vec<PathBuf>,
    /// Entries walkdir could not read.
    pub skipped_count: usize,
    /// Literal roots that do not exist under the project root.
    pub missing_roots: Vec<String>,
}

/// Collect every `.smali` file below the configured roots.
///
/// `roots` are directories relative to `project_root`; entries containing
/// wildcards are expanded as globs. `ignores` are glob patterns matched
/// against paths relative to `project_root`.
pub fn scan_listing_files(
    project_root: &Path,
    roots: &[String],
    ignores: &[String],
) -> Result<ScanResult> {
    let ignore_patterns = ignores
        .iter()
        .map(|p| Pattern::new(p).with_context(|| format!("Invalid ignore pattern: \"{}\"", p)))
        .collect::<Result<Vec<_>>>()?;

    let mut result = ScanResult::default();
    let mut dirs_to_scan: BTreeSet<PathBuf> = BTreeSet::new();

    for root in roots {
        if is_glob_pattern(root) {
            let full_pattern = project_root.join(root);
            let pattern_str = full_pattern.to_string_lossy();
            let entries = glob(&pattern_str)
                .with_context(|| format!("Invalid listing root pattern: \"{}\"", root))?;
            for entry in entries.flatten() {
                if entry.is_dir() {
                    dirs_to_scan.insert(entry);
                }
            }
        } else {
            let path = project_root.join(root);
            if path.is_dir() {
                dirs_to_scan.insert(path);
            } else {
                result.missing_roots.push(root.clone());
            }
        }
    }

    let mut files: BTreeSet<PathBuf> = BTreeSet::new();
    for dir in dirs_to_scan {
        for entry in WalkDir::new(dir) {
            let entry = match entry {
                Ok(e) => e,
                Err(_) => {
                    result.skipped_count += 1;
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || !is_listing(path) {
                continue;
            }

            let relative = path.strip_prefix(project_root).unwrap_or(path);
            if ignore_patterns.iter().any(|p| p.matches_path(relative)) {
                continue;
            }

            files.insert(path.to_path_buf());
        }
    }

    result.files = files.into_iter().collect();
    Ok(result)
}

fn is_listing(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == LISTING_EXTENSION)
}
