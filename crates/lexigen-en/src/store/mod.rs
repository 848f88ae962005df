// Morpheme store: the keyed collection of morpheme entries, its JSON
// load/save surface, and the surface-form index used by the generators.
//
// The store is the single source of truth for generation. It is loaded
// once, never mutated afterward, and every lookup the generators need at
// request time goes through the precomputed `SyllableIndex` rather than
// scanning entries.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use lexigen_core::SyllableMetadata;

// ---------------------------------------------------------------------------
// Entry types
// ---------------------------------------------------------------------------

/// Where a morpheme attaches within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// Word-initial morpheme.
    Prefix,
    /// Root morpheme ("embedded" in the store format).
    Embedded,
    /// Word-final morpheme.
    Suffix,
}

/// One surface form of a morpheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    /// The spelled-out text of this form.
    pub form: String,

    /// Which generation pool the form belongs to.
    pub loc: Location,

    /// Optional semantic category (e.g. "action", "cognition").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Part-of-speech tags this form attaches to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attach_to: Option<Vec<String>>,
}

/// One morpheme entry: surface forms, glosses, origin, and (once
/// enhanced) the syllable analysis of the first form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphemeEntry {
    /// Surface forms; the first form is the primary one.
    pub forms: Vec<Form>,

    /// Gloss strings describing the meaning.
    pub meaning: Vec<String>,

    /// Etymological origin (e.g. "Latin", "Greek").
    pub origin: String,

    /// Syllable analysis of the first form, attached by the enhancement
    /// pass and immutable afterward.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syllables: Option<SyllableMetadata>,
}

impl MorphemeEntry {
    /// The primary surface form, if the entry has any forms.
    pub fn primary_form(&self) -> Option<&Form> {
        self.forms.first()
    }
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Error type for store loading and persistence.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store file does not exist at the given path.
    #[error("morpheme store file not found: {0}")]
    NotFound(String),

    /// The file exists but could not be read or written.
    #[error("failed to access morpheme store: {0}")]
    Io(#[from] std::io::Error),

    /// The file contents are not a valid morpheme store.
    #[error("malformed morpheme store: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A keyed collection of morpheme entries.
///
/// Backed by a `BTreeMap` so iteration order and serialized output are
/// deterministic; re-running the enhancement pass therefore reproduces
/// the enriched store byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MorphemeStore {
    entries: BTreeMap<String, MorphemeEntry>,
}

impl MorphemeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a store from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a store from a file.
    ///
    /// A missing file is reported as [`StoreError::NotFound`] so callers
    /// can distinguish "never enhanced" from "corrupt data".
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(StoreError::NotFound(path.display().to_string()));
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Serialize the store as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    /// Write the store to a file as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let json = self.to_json_pretty()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Look up an entry by its key.
    pub fn get(&self, key: &str) -> Option<&MorphemeEntry> {
        self.entries.get(key)
    }

    /// Insert an entry, replacing any previous entry with the same key.
    pub fn insert(&mut self, key: impl Into<String>, entry: MorphemeEntry) {
        self.entries.insert(key.into(), entry);
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MorphemeEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// SyllableIndex
// ---------------------------------------------------------------------------

/// Direct index from surface form text to precomputed syllable metadata.
///
/// Built once when a generator loads the store. Every form of every entry
/// is indexed, so syllable-count lookups during generation are a single
/// hash probe instead of a scan over the whole store. Forms the store has
/// no analysis for fall back to a one-syllable reading.
#[derive(Debug, Clone, Default)]
pub struct SyllableIndex {
    by_form: hashbrown::HashMap<String, SyllableMetadata>,
}

impl SyllableIndex {
    /// Build the index over every form of every entry in the store.
    ///
    /// When two entries share a form text the first (in key order) wins;
    /// duplicate surface forms are rare and their syllable counts agree
    /// in practice.
    pub fn build(store: &MorphemeStore) -> Self {
        let mut by_form = hashbrown::HashMap::new();
        for (_, entry) in store.iter() {
            let Some(meta) = &entry.syllables else {
                continue;
            };
            for form in &entry.forms {
                by_form
                    .entry(form.form.clone())
                    .or_insert_with(|| meta.clone());
            }
        }
        Self { by_form }
    }

    /// Syllable count for a form; 1 when the form is not indexed.
    ///
    /// Total by construction: an unknown form reads as a single syllable
    /// rather than failing the lookup.
    pub fn count_of(&self, form: &str) -> usize {
        self.by_form.get(form).map_or(1, |m| m.count)
    }

    /// Precomputed metadata for a form, if present.
    pub fn metadata_of(&self, form: &str) -> Option<&SyllableMetadata> {
        self.by_form.get(form)
    }

    /// Metadata for a form, falling back to a single span over the whole
    /// form when no analysis is indexed.
    pub fn metadata_or_single(&self, form: &str) -> SyllableMetadata {
        self.by_form
            .get(form)
            .cloned()
            .unwrap_or_else(|| SyllableMetadata::single(form))
    }

    /// Number of indexed forms.
    pub fn len(&self) -> usize {
        self.by_form.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.by_form.is_empty()
    }
}
