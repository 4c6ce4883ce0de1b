//! Instruction scanning - recognizes the two line shapes that can carry a
//! resource id:
//!
//! - literal loads: `const v0, 0x7f040001`, `const/high16 v1, 0x7f03`
//! - packed-switch directives: `.packed-switch 0x7f040001`

use regex::Regex;
use std::sync::LazyLock;

use crate::resources::{ResourceEntry, ResourceTable};

// const, const/4, const/high16, const-string, ... ending in a 4-8 digit hex operand.
// The operand is whatever follows the last ", ".
static LITERAL_LOAD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<mnemonic>const(?:[/-][0-9A-Za-z/\-]*)?)\s+.*,\s(?P<operand>0x[0-9a-fA-F]{4,8})$")
        .unwrap()
});

static PACKED_SWITCH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\.packed-switch\s+(?P<operand>0x[0-9a-fA-F]{4,8})$").unwrap()
});

/// Classification of one listing line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionMatch {
    NoMatch,
    /// A constant load. `high16` is set when the mnemonic only encodes the
    /// upper half of the value; `value` is already widened.
    LiteralLoad { value: u32, high16: bool },
    /// Base key of a packed-switch table. Never shifted.
    PackedSwitch { value: u32 },
}

impl InstructionMatch {
    pub fn value(&self) -> Option<u32> {
        match self {
            Self::NoMatch => None,
            Self::LiteralLoad { value, .. } | Self::PackedSwitch { value } => Some(*value),
        }
    }
}

/// A line whose constant resolved to a table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanMatch<'t> {
    pub instruction: InstructionMatch,
    pub entry: &'t ResourceEntry,
}

/// Classify a single line (without its line terminator).
pub fn classify_line(line: &str) -> InstructionMatch {
    if let Some(caps) = LITERAL_LOAD_REGEX.captures(line) {
        let high16 = caps["mnemonic"].contains("high16");
        return match decode_literal(&caps["operand"], high16) {
            Some(value) => InstructionMatch::LiteralLoad { value, high16 },
            None => InstructionMatch::NoMatch,
        };
    }

    if let Some(caps) = PACKED_SWITCH_REGEX.captures(line) {
        return match decode_literal(&caps["operand"], false) {
            Some(value) => InstructionMatch::PackedSwitch { value },
            None => InstructionMatch::NoMatch,
        };
    }

    InstructionMatch::NoMatch
}

/// Decode a hex operand, with or without `0x`.
///
/// For high16 loads a short operand holds only the upper 16 bits and is
/// shifted into place. Operands with more than four digits are already
/// the full constant.
pub fn decode_literal(operand: &str, high16: bool) -> Option<u32> {
    let digits = operand.strip_prefix("0x").unwrap_or(operand);
    if digits.is_empty() || digits.len() > 8 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let value = u32::from_str_radix(digits, 16).ok()?;
    if high16 && digits.len() <= 4 {
        Some(value << 16)
    } else {
        Some(value)
    }
}

/// Classify a line and resolve its constant against the table.
///
/// A constant that is not a table key is not an error; the line simply
/// has no match.
pub fn scan_line<'t>(line: &str, table: &'t ResourceTable) -> Option<ScanMatch<'t>> {
    let instruction = classify_line(line);
    let entry = table.get(instruction.value()?)?;
    Some(ScanMatch { instruction, entry })
}
