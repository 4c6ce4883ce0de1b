use crate::listing::{ListingOutcome, ListingStatus};

/// Totals of one run, derived from the per-listing outcomes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub dry_run: bool,
    /// Number of listings scanned.
    pub files_checked: usize,
    /// Listings rewritten (or, in a dry run, that would be rewritten).
    pub files_modified: usize,
    /// Listings that could not be read.
    pub files_skipped: usize,
    pub annotation_count: usize,
}

impl RunSummary {
    pub fn from_outcomes(outcomes: &[ListingOutcome], dry_run: bool) -> Self {
        let mut summary = Self {
            dry_run,
            files_checked: outcomes.len(),
            ..Default::default()
        };

        for outcome in outcomes {
            match outcome.status {
                ListingStatus::Rewritten | ListingStatus::Pending => summary.files_modified += 1,
                ListingStatus::Skipped { .. } => summary.files_skipped += 1,
                ListingStatus::Unmodified => {}
            }
            summary.annotation_count += outcome.annotations.len();
        }

        summary
    }

    /// A dry run that found something to annotate.
    pub fn has_pending_changes(&self) -> bool {
        self.dry_run && self.annotation_count > 0
    }
}
