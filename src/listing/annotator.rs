//! Annotation text for resolved lines.

use super::scanner::{InstructionMatch, ScanMatch};

/// Maximum number of characters of a string literal shown in a preview.
pub const DEFAULT_PREVIEW_LENGTH: usize = 25;

const ELLIPSIS: &str = "...";

/// Replacement text for one matched line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedLine {
    /// Original line with the trailing comment appended.
    pub line: String,
    /// Optional second line previewing a string literal.
    pub preview: Option<String>,
}

/// Build the annotated replacement for `line`.
///
/// Literal loads of string entries get a preview line whose `\t#` sits under
/// the comment of the line above. Packed-switch keys only get the comment.
pub fn annotate(line: &str, scan: &ScanMatch<'_>, preview_length: usize) -> AnnotatedLine {
    let entry = scan.entry;
    let annotated = format!("{}{}", line, public_value_comment(&entry.name, &entry.kind));

    let preview = match (scan.instruction, &entry.literal_value) {
        (InstructionMatch::LiteralLoad { .. }, Some(value)) => Some(format!(
            "{}\t#{} = \"{}\"",
            " ".repeat(line.chars().count()),
            entry.name,
            preview_literal(value, preview_length)
        )),
        _ => None,
    };

    AnnotatedLine {
        line: annotated,
        preview,
    }
}

pub fn public_value_comment(name: &str, kind: &str) -> String {
    format!("\t#Public value '{}' (type={})", name, kind)
}

/// Truncate a literal to `max_len` characters, appending `...` when cut.
///
/// Line breaks are escaped so the preview stays on one line.
pub fn preview_literal(value: &str, max_len: usize) -> String {
    let mut preview: String = value.chars().take(max_len).collect();
    if value.chars().count() > max_len {
        preview.push_str(ELLIPSIS);
    }
    preview.replace('\r', "\\r").replace('\n', "\\n")
}
