//! Resource declarations - the identifier table built from `public.xml`
//! and optionally enriched with literal values from `strings.xml`.
//!
//! ## Module Structure
//!
//! - `public`: Builds the [`ResourceTable`] from public declarations
//! - `strings`: Attaches string literals to string-typed entries

pub mod public;
pub mod strings;

use std::collections::{BTreeMap, HashMap};

pub use public::{LoadTableResult, load_public_file, parse_public_xml};
pub use strings::{EnrichResult, enrich_from_file, enrich_strings};

/// The resource type whose entries can carry a literal value.
pub const STRING_KIND: &str = "string";

/// A single public resource declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    pub id: u32,
    pub name: String,
    /// Resource type as declared (`string`, `layout`, `drawable`, ...).
    pub kind: String,
    /// Literal text for `string` entries, set during enrichment.
    pub literal_value: Option<String>,
}

impl ResourceEntry {
    pub fn new(id: u32, name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: kind.into(),
            literal_value: None,
        }
    }

    pub fn is_string(&self) -> bool {
        self.kind == STRING_KIND
    }
}

/// Identifier -> entry mapping.
///
/// Keys are only ever added while loading; enrichment fills in
/// `literal_value` on entries that already exist.
#[derive(Debug, Default, Clone)]
pub struct ResourceTable {
    entries: BTreeMap<u32, ResourceEntry>,
}

impl ResourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any earlier declaration with the same id.
    pub fn insert(&mut self, entry: ResourceEntry) -> Option<ResourceEntry> {
        self.entries.insert(entry.id, entry)
    }

    pub fn get(&self, id: u32) -> Option<&ResourceEntry> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_strings(&self) -> bool {
        self.entries.values().any(ResourceEntry::is_string)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceEntry> {
        self.entries.values()
    }

    /// Ids of all string-typed entries, grouped by declared name.
    pub(crate) fn string_ids_by_name(&self) -> HashMap<String, Vec<u32>> {
        let mut index: HashMap<String, Vec<u32>> = HashMap::new();
        for entry in self.entries.values().filter(|e| e.is_string()) {
            index.entry(entry.name.clone()).or_default().push(entry.id);
        }
        index
    }

    pub(crate) fn get_mut(&mut self, id: u32) -> Option<&mut ResourceEntry> {
        self.entries.get_mut(&id)
    }
}

/// A recoverable problem found while reading a declaration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    pub file_path: String,
    pub message: String,
}

impl LoadWarning {
    pub(crate) fn new(file_path: &str, message: impl Into<String>) -> Self {
        Self {
            file_path: file_path.to_string(),
            message: message.into(),
        }
    }
}

/// Maps byte offsets to 1-based line numbers.
///
/// Offsets are expected in increasing order, so each lookup only counts the
/// newlines since the previous one. A smaller offset restarts from the top.
pub(crate) struct LineTracker<'a> {
    content: &'a str,
    offset: usize,
    line: usize,
}

impl<'a> LineTracker<'a> {
    pub(crate) fn new(content: &'a str) -> Self {
        Self {
            content,
            offset: 0,
            line: 1,
        }
    }

    pub(crate) fn line_at(&mut self, offset: usize) -> usize {
        let end = offset.min(self.content.len());
        if end < self.offset {
            self.offset = 0;
            self.line = 1;
        }
        self.line += self.content.as_bytes()[self.offset..end]
            .iter()
            .filter(|&&b| b == b'\n')
            .count();
        self.offset = end;
        self.line
    }
}
