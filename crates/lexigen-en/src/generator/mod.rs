// Word synthesis: shared result types and the two generator variants.
//
// - `syllable_count`: weight-bucketed generation against an exact
//   syllable budget
// - `database`: uniform draws over the whole store with boundary and
//   total-count validation, plus theme filtering

use lexigen_core::syllable::{SyllableMetadata, SyllableSpan};

pub mod database;
pub mod syllable_count;

pub use database::{DatabaseWordGenerator, ThemeLexicon};
pub use syllable_count::{GeneratorOptions, SyllableWordGenerator};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Error type for word generation.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The requested syllable count is outside the supported range.
    /// Surfaced immediately, never retried.
    #[error("syllable count must be between {min} and {max}, got {requested}")]
    ConstraintViolation {
        requested: usize,
        min: usize,
        max: usize,
    },

    /// No valid morpheme combination was found within the retry budget.
    #[error("no valid morpheme combination found within {attempts} attempts")]
    Exhausted { attempts: usize },
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// A morpheme committed into a generated word: its surface form and
/// gloss, detached from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphemeGloss {
    /// Surface form as committed (cleaned for the budgeted generator).
    pub form: String,
    /// Gloss strings of the source entry.
    pub meaning: Vec<String>,
}

/// One generated word. Ephemeral: constructed per call, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedWord {
    /// The combined surface string.
    pub word: String,

    /// Committed prefix, if any.
    pub prefix: Option<MorphemeGloss>,

    /// Committed root, if any.
    pub root: Option<MorphemeGloss>,

    /// Committed suffix, if any.
    pub suffix: Option<MorphemeGloss>,

    /// Combined syllable metadata, recombined from the committed
    /// components' precomputed spans (never re-segmented).
    pub syllables: SyllableMetadata,
}

impl GeneratedWord {
    /// The ordered syllable texts of the combined word.
    pub fn breakdown(&self) -> Vec<&str> {
        self.syllables.texts()
    }

    /// The committed forms joined with `+`, empty slots omitted.
    pub fn segments(&self) -> String {
        [&self.prefix, &self.root, &self.suffix]
            .into_iter()
            .flatten()
            .map(|g| g.form.as_str())
            .collect::<Vec<_>>()
            .join("+")
    }
}

// ---------------------------------------------------------------------------
// Span recombination
// ---------------------------------------------------------------------------

/// Concatenate per-component syllable metadata in slot order, shifting
/// each span so offsets accumulate across components.
///
/// Positions are nominal: they reflect the committed component lengths,
/// not any boundary smoothing applied to the surface string.
pub(crate) fn recombine(parts: &[&SyllableMetadata]) -> SyllableMetadata {
    let mut components = Vec::new();
    let mut pos = 0;
    for meta in parts {
        for span in &meta.components {
            let len = span.len();
            components.push(SyllableSpan {
                text: span.text.clone(),
                position: [pos, pos + len],
            });
            pos += len;
        }
    }
    SyllableMetadata::from_components(components)
}
