//! Listing processing - scanning smali text for resource ids and rewriting
//! it with annotations.
//!
//! ## Module Structure
//!
//! - `scanner`: Line classification and table lookup
//! - `annotator`: Comment and string preview formatting
//! - `rewriter`: Whole-listing rewrite and conditional write-back
//! - `file_scanner`: Discovery of listing files under the project root

pub mod annotator;
pub mod file_scanner;
pub mod rewriter;
pub mod scanner;

pub use annotator::{AnnotatedLine, DEFAULT_PREVIEW_LENGTH, annotate, preview_literal};
pub use file_scanner::{LISTING_EXTENSION, ScanResult, scan_listing_files};
pub use rewriter::{
    Annotation, ListingOutcome, ListingStatus, RewriteOptions, RewriteResult,
    process_listing_file, rewrite_listing,
};
pub use scanner::{InstructionMatch, ScanMatch, classify_line, decode_literal, scan_line};
