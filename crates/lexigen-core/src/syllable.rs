// Syllable data model shared by the analyzer, the enriched morpheme
// store, and the word generators.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SyllableSpan
// ---------------------------------------------------------------------------

/// One syllable within a surface form, with its `[start, end)` character
/// range in the owning form.
///
/// The serialized shape matches the enriched store format:
/// `{"syllable": "won", "position": [0, 3]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllableSpan {
    /// The syllable text.
    #[serde(rename = "syllable")]
    pub text: String,

    /// Half-open `[start, end)` character offsets into the owning form.
    pub position: [usize; 2],
}

impl SyllableSpan {
    /// Create a span from text and its starting offset.
    pub fn new(text: impl Into<String>, start: usize) -> Self {
        let text = text.into();
        let end = start + text.chars().count();
        Self {
            text,
            position: [start, end],
        }
    }

    /// Start offset (inclusive).
    pub fn start(&self) -> usize {
        self.position[0]
    }

    /// End offset (exclusive).
    pub fn end(&self) -> usize {
        self.position[1]
    }

    /// Number of characters covered by this span.
    pub fn len(&self) -> usize {
        self.position[1] - self.position[0]
    }

    /// Whether the span covers no characters.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// SyllableMetadata
// ---------------------------------------------------------------------------

/// Syllable analysis of one surface form: the syllable count plus the
/// ordered spans.
///
/// Invariants: `count == components.len()`; spans are contiguous,
/// non-overlapping, ordered left to right, and their concatenation
/// reconstructs the analyzed form exactly. Computed once at enhancement
/// time and treated as immutable afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllableMetadata {
    /// Number of syllables.
    pub count: usize,

    /// Ordered syllable spans.
    pub components: Vec<SyllableSpan>,
}

impl SyllableMetadata {
    /// Metadata for an empty form: zero syllables, no components.
    pub fn empty() -> Self {
        Self {
            count: 0,
            components: Vec::new(),
        }
    }

    /// Metadata treating the whole form as a single syllable.
    ///
    /// Used as the fallback when a form has no precomputed analysis.
    pub fn single(form: &str) -> Self {
        if form.is_empty() {
            return Self::empty();
        }
        Self {
            count: 1,
            components: vec![SyllableSpan::new(form, 0)],
        }
    }

    /// Build metadata from ordered spans.
    pub fn from_components(components: Vec<SyllableSpan>) -> Self {
        Self {
            count: components.len(),
            components,
        }
    }

    /// The ordered syllable texts.
    pub fn texts(&self) -> Vec<&str> {
        self.components.iter().map(|c| c.text.as_str()).collect()
    }

    /// Check the structural invariants against the owning form: contiguous
    /// ordered spans whose texts concatenate to `form` exactly.
    pub fn covers(&self, form: &str) -> bool {
        if self.count != self.components.len() {
            return false;
        }
        let mut pos = 0;
        let mut rebuilt = String::new();
        for span in &self.components {
            if span.start() != pos || span.end() != span.start() + span.text.chars().count() {
                return false;
            }
            pos = span.end();
            rebuilt.push_str(&span.text);
        }
        rebuilt == form && pos == form.chars().count()
    }

    /// The weight class implied by the syllable count.
    pub fn weight(&self) -> WeightClass {
        WeightClass::from_count(self.count)
    }
}

// ---------------------------------------------------------------------------
// WeightClass
// ---------------------------------------------------------------------------

/// Syllable weight bucket used to match morphemes to a syllable budget.
///
/// Derived from the syllable count, never stored independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightClass {
    /// At most one syllable.
    Light,
    /// Two or more syllables.
    Heavy,
}

impl WeightClass {
    /// `Light` for counts of 0 or 1, `Heavy` otherwise.
    pub fn from_count(count: usize) -> Self {
        if count <= 1 {
            WeightClass::Light
        } else {
            WeightClass::Heavy
        }
    }
}
