//! The correction-merging engine: turns a raw list of suggested edits into
//! a corrected text without letting overlapping or misordered suggestions
//! corrupt each other's offsets.

pub mod casing;
pub mod confidence;
pub mod grouping;
pub mod selection;
pub mod splice;

/// Category of a suggested edit, derived from the checker's rule descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Grammar,
    Spelling,
    Typos,
    Style,
    Other,
}

impl Category {
    /// Map a rule-category identifier from the checker onto our categories.
    /// Unknown identifiers fall back to `Other`.
    pub fn from_id(id: &str) -> Self {
        match id.to_ascii_uppercase().as_str() {
            "GRAMMAR" => Category::Grammar,
            "SPELLING" | "MISSPELLING" => Category::Spelling,
            "TYPOS" => Category::Typos,
            "STYLE" => Category::Style,
            _ => Category::Other,
        }
    }
}

/// A single suggested replacement for a span of the original text.
///
/// `offset` and `length` are character (not byte) indices into the text the
/// checker was given, with `offset..offset + length` being the span to
/// replace. `replacements` is ordered best-first; an edit with no
/// replacements is not actionable.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateEdit {
    pub offset: usize,
    pub length: usize,
    pub replacements: Vec<String>,
    pub category: Category,
}

impl CandidateEdit {
    /// One past the last character of the span in the original text.
    pub fn end(&self) -> usize {
        self.offset + self.length
    }
}

/// A maximal run of transitively overlapping (or touching) candidate edits.
/// Groups are disjoint from each other and ordered by start offset.
#[derive(Debug, Clone, PartialEq)]
pub struct EditGroup {
    pub edits: Vec<CandidateEdit>,
}

impl EditGroup {
    pub fn start(&self) -> usize {
        self.edits.first().map(|e| e.offset).unwrap_or(0)
    }
}

/// The edit chosen to represent a group, with the replacement string that
/// will actually be spliced in and the original substring it replaces.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEdit {
    pub offset: usize,
    pub length: usize,
    pub original: String,
    pub replacement: String,
}
