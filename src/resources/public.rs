//! Loader for `res/values/public.xml`.
//!
//! Each `<public type=".." name=".." id="0x7f040001"/>` element becomes one
//! [`ResourceEntry`]. Elements missing an attribute, or carrying an id that
//! is not a 32-bit hex number, are skipped with a [`LoadWarning`].

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use super::{LineTracker, LoadWarning, ResourceEntry, ResourceTable};

const PUBLIC_TAG: &[u8] = b"public";

/// Output of loading the declaration document.
#[derive(Debug, Default)]
pub struct LoadTableResult {
    pub table: ResourceTable,
    /// True when at least one entry is typed `string`; enrichment only
    /// runs (and `strings.xml` is only required) when this is set.
    pub has_strings: bool,
    pub warnings: Vec<LoadWarning>,
}

/// Read and parse a `public.xml` file.
///
/// A missing or unreadable file is an error: there is no meaningful
/// table to continue with.
pub fn load_public_file(path: &Path) -> Result<LoadTableResult> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("\"{}\" file not found or unreadable", path.display()))?;
    parse_public_xml(&content, &path.to_string_lossy())
}

pub fn parse_public_xml(content: &str, file_path: &str) -> Result<LoadTableResult> {
    let mut reader = Reader::from_str(content);
    let mut result = LoadTableResult::default();
    let mut lines = LineTracker::new(content);

    loop {
        // Start of the next event; after `read_event` the position is past its end
        let start = reader.buffer_position() as usize;
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) => bail!(
                "Failed to parse \"{}\" at line {}: {}",
                file_path,
                lines.line_at(reader.error_position() as usize),
                e
            ),
        };

        match event {
            Event::Start(element) | Event::Empty(element)
                if element.name().as_ref() == PUBLIC_TAG =>
            {
                match read_entry(&element) {
                    Ok(entry) => {
                        result.has_strings |= entry.is_string();
                        result.table.insert(entry);
                    }
                    Err(reason) => result.warnings.push(LoadWarning::new(
                        file_path,
                        format!("line {}: {}; skipping entry", lines.line_at(start), reason),
                    )),
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(result)
}

fn read_entry(element: &BytesStart<'_>) -> std::result::Result<ResourceEntry, String> {
    let raw_id = required_attr(element, "id")?;
    let name = required_attr(element, "name")?;
    let kind = required_attr(element, "type")?;

    let id = parse_resource_id(&raw_id)
        .ok_or_else(|| format!("<public> id \"{}\" is not a 32-bit hex value", raw_id))?;

    Ok(ResourceEntry::new(id, name, kind))
}

fn required_attr(element: &BytesStart<'_>, key: &str) -> std::result::Result<String, String> {
    let attr = element
        .try_get_attribute(key)
        .map_err(|e| format!("<public> has a malformed attribute: {}", e))?
        .ok_or_else(|| format!("<public> is missing attribute '{}'", key))?;

    attr.unescape_value()
        .map(|value| value.into_owned())
        .map_err(|e| format!("<public> attribute '{}' could not be decoded: {}", key, e))
}

/// Parse a resource id written as hex, with or without a `0x` prefix.
pub fn parse_resource_id(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    let digits = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .unwrap_or(raw);

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}
