//! Listing rewriting - applies annotations across a whole listing and writes
//! it back only when something changed.

use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{
    annotator::{DEFAULT_PREVIEW_LENGTH, annotate},
    scanner::{InstructionMatch, scan_line},
};
use crate::resources::ResourceTable;

#[derive(Debug, Clone, Copy)]
pub struct RewriteOptions {
    pub preview_length: usize,
    /// Compute annotations without touching the file.
    pub dry_run: bool,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            preview_length: DEFAULT_PREVIEW_LENGTH,
            dry_run: false,
        }
    }
}

/// One resolved identifier in a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// 1-based line number in the original listing.
    pub line: usize,
    pub id: u32,
    pub name: String,
    pub kind: String,
    pub packed_switch: bool,
}

#[derive(Debug, Clone, Default)]
pub struct RewriteResult {
    pub content: String,
    pub annotations: Vec<Annotation>,
}

impl RewriteResult {
    pub fn is_modified(&self) -> bool {
        !self.annotations.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingStatus {
    /// No line resolved; the file was left alone.
    Unmodified,
    Rewritten,
    /// Dry run: the file would have been rewritten.
    Pending,
    /// The file could not be read as UTF-8 text.
    Skipped { reason: String },
}

#[derive(Debug, Clone)]
pub struct ListingOutcome {
    pub file_path: String,
    pub status: ListingStatus,
    pub annotations: Vec<Annotation>,
}

/// Annotate every resolvable line of `source`.
///
/// Each line keeps its own terminator; a last line without one gets `\n`.
pub fn rewrite_listing(source: &str, table: &ResourceTable, preview_length: usize) -> RewriteResult {
    let mut result = RewriteResult {
        content: String::with_capacity(source.len()),
        annotations: Vec::new(),
    };

    for (idx, chunk) in source.split_inclusive('\n').enumerate() {
        let (line, ending) = split_line_ending(chunk);

        let Some(scan) = scan_line(line, table) else {
            result.content.push_str(line);
            result.content.push_str(ending);
            continue;
        };

        let annotated = annotate(line, &scan, preview_length);
        result.content.push_str(&annotated.line);
        result.content.push_str(ending);
        if let Some(preview) = annotated.preview {
            result.content.push_str(&preview);
            result.content.push_str(ending);
        }

        result.annotations.push(Annotation {
            line: idx + 1,
            id: scan.entry.id,
            name: scan.entry.name.clone(),
            kind: scan.entry.kind.clone(),
            packed_switch: matches!(scan.instruction, InstructionMatch::PackedSwitch { .. }),
        });
    }

    result
}

fn split_line_ending(chunk: &str) -> (&str, &str) {
    if let Some(line) = chunk.strip_suffix("\r\n") {
        (line, "\r\n")
    } else if let Some(line) = chunk.strip_suffix('\n') {
        (line, "\n")
    } else {
        (chunk, "\n")
    }
}

/// Rewrite one listing file in place.
///
/// The file is written once, and only when at least one line was annotated.
/// Unreadable or non-UTF-8 files are skipped; a failed write is an error.
pub fn process_listing_file(
    path: &Path,
    table: &ResourceTable,
    options: &RewriteOptions,
) -> Result<ListingOutcome> {
    let file_path = path.to_string_lossy().to_string();

    let source = match fs::read(path) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(source) => source,
            Err(_) => {
                return Ok(ListingOutcome {
                    file_path,
                    status: ListingStatus::Skipped {
                        reason: "not valid UTF-8".to_string(),
                    },
                    annotations: Vec::new(),
                });
            }
        },
        Err(e) => {
            return Ok(ListingOutcome {
                file_path,
                status: ListingStatus::Skipped {
                    reason: e.to_string(),
                },
                annotations: Vec::new(),
            });
        }
    };

    let result = rewrite_listing(&source, table, options.preview_length);
    let status = if !result.is_modified() {
        ListingStatus::Unmodified
    } else if options.dry_run {
        ListingStatus::Pending
    } else {
        fs::write(path, &result.content)
            .with_context(|| format!("Failed to write listing: {}", path.display()))?;
        ListingStatus::Rewritten
    };

    Ok(ListingOutcome {
        file_path,
        status,
        annotations: result.annotations,
    })
}
