//! String enrichment from `res/values/strings.xml`.
//!
//! Every `<string name="..">text</string>` declaration is attached to all
//! string-typed table entries with the same name. Names are not unique across
//! ids, so one literal can end up on several entries.

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use super::{LineTracker, LoadWarning, ResourceTable};

const STRING_TAG: &[u8] = b"string";

#[derive(Debug, Default)]
pub struct EnrichResult {
    /// Number of table entries that received a literal.
    pub enriched: usize,
    pub warnings: Vec<LoadWarning>,
}

/// A `<string>` element being read.
struct PendingString {
    name: Option<String>,
    text: String,
    depth: usize,
}

pub fn enrich_from_file(table: &mut ResourceTable, path: &Path) -> Result<EnrichResult> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("\"{}\" file not found or unreadable", path.display()))?;
    enrich_strings(table, &content, &path.to_string_lossy())
}

pub fn enrich_strings(
    table: &mut ResourceTable,
    content: &str,
    file_path: &str,
) -> Result<EnrichResult> {
    let index = table.string_ids_by_name();
    let mut result = EnrichResult::default();
    let mut reader = Reader::from_str(content);
    let mut pending: Option<PendingString> = None;

    let mut finish = |string: PendingString, result: &mut EnrichResult| {
        let Some(name) = string.name else {
            return;
        };
        let Some(ids) = index.get(&name) else {
            return;
        };
        for id in ids {
            if let Some(entry) = table.get_mut(*id)
                && entry.literal_value.is_none()
            {
                entry.literal_value = Some(string.text.clone());
                result.enriched += 1;
            }
        }
    };

    let mut lines = LineTracker::new(content);

    loop {
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
            Event::Start(element) => match pending.as_mut() {
                Some(string) => string.depth += 1,
                None if element.name().as_ref() == STRING_TAG => {
                    let name = read_name(&element, file_path, &mut result.warnings, || {
                        lines.line_at(start)
                    });
                    pending = Some(PendingString {
                        name,
                        text: String::new(),
                        depth: 1,
                    });
                }
                None => {}
            },
            Event::Empty(element) if pending.is_none() && element.name().as_ref() == STRING_TAG => {
                let name = read_name(&element, file_path, &mut result.warnings, || {
                    lines.line_at(start)
                });
                finish(
                    PendingString {
                        name,
                        text: String::new(),
                        depth: 0,
                    },
                    &mut result,
                );
            }
            Event::Text(text) => {
                if let Some(string) = pending.as_mut() {
                    match text.unescape() {
                        Ok(value) => string.text.push_str(&value),
                        Err(_) => string.text.push_str(&String::from_utf8_lossy(&text)),
                    }
                }
            }
            Event::CData(data) => {
                if let Some(string) = pending.as_mut() {
                    string.text.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Event::End(_) => {
                let closed = pending.as_mut().is_some_and(|string| {
                    string.depth -= 1;
                    string.depth == 0
                });
                if closed && let Some(string) = pending.take() {
                    finish(string, &mut result);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(result)
}

/// Read the `name` attribute, recording a warning when it is unusable.
///
/// `line` is only called on the warning path.
fn read_name(
    element: &BytesStart<'_>,
    file_path: &str,
    warnings: &mut Vec<LoadWarning>,
    line: impl FnOnce() -> usize,
) -> Option<String> {
    let reason = match element.try_get_attribute("name") {
        Ok(Some(attr)) => match attr.unescape_value() {
            Ok(value) => return Some(value.into_owned()),
            Err(e) => format!("<string> name could not be decoded: {}", e),
        },
        Ok(None) => "<string> is missing attribute 'name'".to_string(),
        Err(e) => format!("<string> has a malformed attribute: {}", e),
    };

    warnings.push(LoadWarning::new(
        file_path,
        format!("line {}: {}; skipping entry", line(), reason),
    ));
    None
}
