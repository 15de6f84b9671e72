//! String Interner - Deduplicate tag and attribute names
//!
//! Tag names ("div", "button") and attribute names ("class", "step_index")
//! repeat on every element of a presentation, so they are stored once and
//! referenced by a 4-byte ID.

use std::collections::HashMap;

/// Interned string ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct InternedString(pub u32);

impl InternedString {
    /// Empty string
    pub const EMPTY: InternedString = InternedString(0);
}

/// String interner for deduplicating names
#[derive(Debug)]
pub struct StringInterner {
    strings: Vec<Box<str>>,
    map: HashMap<Box<str>, u32>,
}

impl StringInterner {
    /// Create a new interner with common presentation markup pre-interned
    pub fn new() -> Self {
        let mut interner = Self {
            strings: Vec::with_capacity(64),
            map: HashMap::with_capacity(64),
        };

        // Index 0 is always the empty string
        interner.intern("");

        const COMMON_TAGS: &[&str] = &[
            "html", "head", "body", "title", "div", "section", "article",
            "span", "p", "img", "figure", "object", "button", "script", "style",
        ];

        const COMMON_ATTRS: &[&str] = &[
            "id", "class", "style", "src", "alt", "type", "disabled", "step_index",
        ];

        for name in COMMON_TAGS.iter().chain(COMMON_ATTRS) {
            interner.intern(name);
        }

        interner
    }

    /// Intern a string, returning the existing ID when already present
    pub fn intern(&mut self, s: &str) -> InternedString {
        if let Some(&idx) = self.map.get(s) {
            return InternedString(idx);
        }

        let idx = self.strings.len() as u32;
        self.strings.push(s.into());
        self.map.insert(s.into(), idx);
        InternedString(idx)
    }

    /// Look up a string without interning it
    pub fn lookup(&self, s: &str) -> Option<InternedString> {
        self.map.get(s).map(|&idx| InternedString(idx))
    }

    /// Get the string for an interned ID (empty for unknown IDs)
    #[inline]
    pub fn get(&self, id: InternedString) -> &str {
        self.strings.get(id.0 as usize).map(|s| s.as_ref()).unwrap_or("")
    }

    /// Number of interned strings
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
