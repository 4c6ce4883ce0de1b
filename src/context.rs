//! Run context: resolves document paths, owns the resource table, and drives
//! the per-listing rewrite once the table is complete.
//!
//! Stages run in a fixed order: [`ResolveContext::load_table`], then
//! [`ResolveContext::enrich_strings`] (only when the table has string
//! entries), then [`ResolveContext::rewrite_listings`]. The table is never
//! mutated after enrichment, so listings are processed in parallel against a
//! shared reference.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use rayon::prelude::*;

use crate::{
    config::{Config, load_config},
    listing::{
        ListingOutcome, RewriteOptions, ScanResult, process_listing_file, scan_listing_files,
    },
    resources::{LoadWarning, ResourceTable, enrich_from_file, load_public_file},
};

/// Values given on the command line that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub preview_length: Option<usize>,
}

pub struct ResolveContext {
    pub project_root: PathBuf,
    pub config: Config,
    /// True if `.smaliresrc.json` was found in the project root.
    pub config_from_file: bool,
    pub table: ResourceTable,
    /// Set by `load_table` when any entry is typed `string`.
    pub has_strings: bool,
    /// Number of table entries that received a string literal.
    pub enriched_count: usize,
    /// Recoverable problems from both declaration documents.
    pub warnings: Vec<LoadWarning>,
}

impl ResolveContext {
    pub fn new(project_root: &Path, overrides: &Overrides) -> Result<Self> {
        if !project_root.is_dir() {
            bail!(
                "Project root is not a directory: {}",
                project_root.display()
            );
        }

        let loaded = load_config(project_root)?;
        let mut config = loaded.config;
        if let Some(preview_length) = overrides.preview_length {
            config.preview_length = preview_length;
            config.validate()?;
        }

        Ok(Self {
            project_root: project_root.to_path_buf(),
            config,
            config_from_file: loaded.from_file,
            table: ResourceTable::new(),
            has_strings: false,
            enriched_count: 0,
            warnings: Vec::new(),
        })
    }

    pub fn public_xml_path(&self) -> PathBuf {
        self.project_root.join(&self.config.public_xml)
    }

    pub fn strings_xml_path(&self) -> PathBuf {
        self.project_root.join(&self.config.strings_xml)
    }

    /// Build the table from `public.xml`. A missing document is fatal.
    pub fn load_table(&mut self) -> Result<()> {
        let loaded = load_public_file(&self.public_xml_path())?;
        self.table = loaded.table;
        self.has_strings = loaded.has_strings;
        self.warnings.extend(loaded.warnings);
        Ok(())
    }

    /// Attach string literals from `strings.xml`.
    ///
    /// Does nothing (and does not require the document) when the table has
    /// no string entries. Returns whether the document was read.
    pub fn enrich_strings(&mut self) -> Result<bool> {
        if !self.has_strings {
            return Ok(false);
        }
        let path = self.strings_xml_path();
        let enriched = enrich_from_file(&mut self.table, &path)?;
        self.enriched_count = enriched.enriched;
        self.warnings.extend(enriched.warnings);
        Ok(true)
    }

    pub fn scan_listings(&self) -> Result<ScanResult> {
        scan_listing_files(
            &self.project_root,
            &self.config.smali_roots,
            &self.config.ignores,
        )
    }

    /// Rewrite every listing in `files`. Outcomes come back in input order;
    /// the first write failure aborts the run.
    pub fn rewrite_listings(&self, files: &[PathBuf], dry_run: bool) -> Result<Vec<ListingOutcome>> {
        let options = RewriteOptions {
            preview_length: self.config.preview_length,
            dry_run,
        };

        files
            .par_iter()
            .map(|path| process_listing_file(path, &self.table, &options))
            .collect()
    }

    /// Path relative to the project root, for display.
    pub fn display_path<'a>(&self, path: &'a str) -> &'a str {
        let root = self.project_root.to_string_lossy();
        path.strip_prefix(&*root)
            .map(|p| p.trim_start_matches(std::path::MAIN_SEPARATOR))
            .unwrap_or(path)
    }
}
