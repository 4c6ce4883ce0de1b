//! Report formatting and printing utilities.
//!
//! Core modules return warnings and outcomes; everything the user sees is
//! printed from here. Each printer has a `_to` variant taking a writer.

use std::io::{self, Write};

use colored::Colorize;

use super::summary::RunSummary;
use crate::{
    context::ResolveContext,
    listing::{ListingOutcome, ListingStatus},
    resources::LoadWarning,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print_progress(message: &str) {
    print_progress_to(message, &mut io::stdout().lock());
}

pub fn print_progress_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{}", message);
}

pub fn print_warning(message: &str) {
    print_warning_to(message, &mut io::stdout().lock());
}

pub fn print_warning_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), message);
}

/// Print warnings collected while reading the declaration documents.
pub fn print_load_warnings(ctx: &ResolveContext, warnings: &[LoadWarning]) {
    print_load_warnings_to(ctx, warnings, &mut io::stdout().lock());
}

pub fn print_load_warnings_to<W: Write>(
    ctx: &ResolveContext,
    warnings: &[LoadWarning],
    writer: &mut W,
) {
    for warning in warnings {
        print_warning_to(
            &format!("{}: {}", ctx.display_path(&warning.file_path), warning.message),
            writer,
        );
    }
}

/// Print skipped listings, and with `verbose` every annotation made.
pub fn print_outcomes(ctx: &ResolveContext, outcomes: &[ListingOutcome], verbose: bool) {
    print_outcomes_to(ctx, outcomes, verbose, &mut io::stdout().lock());
}

pub fn print_outcomes_to<W: Write>(
    ctx: &ResolveContext,
    outcomes: &[ListingOutcome],
    verbose: bool,
    writer: &mut W,
) {
    for outcome in outcomes {
        let path = ctx.display_path(&outcome.file_path);

        if let ListingStatus::Skipped { reason } = &outcome.status {
            print_warning_to(&format!("{}: skipped ({})", path, reason), writer);
            continue;
        }
        if !verbose {
            continue;
        }

        for annotation in &outcome.annotations {
            let _ = writeln!(
                writer,
                "  {} {}:{}  {} -> '{}' (type={}){}",
                "-->".blue(),
                path,
                annotation.line,
                format!("0x{:08x}", annotation.id).cyan(),
                annotation.name,
                annotation.kind,
                if annotation.packed_switch {
                    " [packed-switch]"
                } else {
                    ""
                }
            );
        }
        match outcome.status {
            ListingStatus::Rewritten => {
                let _ = writeln!(writer, "{} {}", "Rewrote".green(), path);
            }
            ListingStatus::Pending => {
                let _ = writeln!(writer, "{} {}", "Would rewrite".yellow(), path);
            }
            _ => {}
        }
    }
}

pub fn print_summary(summary: &RunSummary) {
    print_summary_to(summary, &mut io::stdout().lock());
}

pub fn print_summary_to<W: Write>(summary: &RunSummary, writer: &mut W) {
    let checked = format!(
        "{} {}",
        summary.files_checked,
        if summary.files_checked == 1 {
            "listing"
        } else {
            "listings"
        }
    );

    if summary.annotation_count == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Checked {} - no resource identifiers found", checked).green()
        );
    } else if summary.dry_run {
        let _ = writeln!(
            writer,
            "{} {} {} line(s) in {} file(s) (checked {}).",
            FAILURE_MARK.red(),
            "Would annotate".yellow().bold(),
            summary.annotation_count,
            summary.files_modified,
            checked
        );
        let _ = writeln!(
            writer,
            "Run without {} to rewrite these files.",
            "--dry-run".cyan()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} {} line(s) in {} file(s) (checked {}).",
            SUCCESS_MARK.green(),
            "Annotated".green().bold(),
            summary.annotation_count,
            summary.files_modified,
            checked
        );
    }
}
