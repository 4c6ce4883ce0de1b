//! Run driver.
//!
//! Stages run strictly in order: load `public.xml`, enrich from
//! `strings.xml` when needed, then rewrite every listing.
//!
//! # Returns
//! - `Ok(ExitStatus)`: `Failure` for a dry run with pending annotations
//! - `Err` on a fatal condition (missing document, malformed XML, write failure)

use anyhow::Result;

use super::{
    args::Arguments,
    exit_status::ExitStatus,
    report::{self, print_progress, print_warning},
    summary::RunSummary,
};
use crate::context::ResolveContext;

pub fn run(args: &Arguments) -> Result<ExitStatus> {
    let mut ctx = ResolveContext::new(&args.project_root, &args.overrides())?;

    print_progress(&format!("Parsing ./{}...", ctx.config.public_xml));
    ctx.load_table()?;

    if ctx.has_strings {
        print_progress(&format!("Parsing ./{}...", ctx.config.strings_xml));
        ctx.enrich_strings()?;
    }

    report::print_load_warnings(&ctx, &ctx.warnings);
    if args.verbose {
        print_progress(&format!(
            "Loaded {} resource(s), {} with string values.",
            ctx.table.len(),
            ctx.enriched_count
        ));
    }

    let roots = ctx.config.smali_roots.join(", ");
    if args.dry_run {
        print_progress(&format!("Scanning files in {} (dry run)...", roots));
    } else {
        print_progress(&format!("Making modifications to files in {}...", roots));
    }

    let scan = ctx.scan_listings()?;
    if args.verbose {
        for root in &scan.missing_roots {
            print_warning(&format!("listing directory not found: ./{}", root));
        }
    }
    if scan.skipped_count > 0 {
        print_warning(&format!(
            "{} path(s) could not be read while scanning listings",
            scan.skipped_count
        ));
    }
    if scan.files.is_empty() {
        print_warning("no .smali listings found");
    }

    let outcomes = ctx.rewrite_listings(&scan.files, args.dry_run)?;
    report::print_outcomes(&ctx, &outcomes, args.verbose);

    let summary = RunSummary::from_outcomes(&outcomes, args.dry_run);
    report::print_summary(&summary);

    if summary.has_pending_changes() {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}
