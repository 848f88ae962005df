//! English morpheme store, syllable analysis, and word synthesis.
//!
//! The pipeline runs in two stages. Offline, the enhancement pass reads a
//! raw morpheme store, segments each entry's primary surface form into
//! syllables, and writes the enriched store back out. At runtime the word
//! generators load the enriched store read-only and combine prefixes,
//! roots, and suffixes under phonological and syllable-count constraints.
//!
//! # Architecture
//!
//! - [`store`] -- morpheme store load/save plus the form-to-syllables index
//! - [`tokenizer`] -- the syllable segmenter contract and the default
//!   legality-based implementation
//! - [`syllable`] -- span derivation and the lone-vowel merge pass
//! - [`phonology`] -- pure phonological rule predicates and transforms
//! - [`enhance`] -- the batch enhancement pass
//! - [`generator`] -- the syllable-count and whole-database generators

pub mod enhance;
pub mod generator;
pub mod phonology;
pub mod store;
pub mod syllable;
pub mod tokenizer;

pub use generator::{GenerateError, GeneratedWord};
pub use store::{MorphemeStore, StoreError};
pub use syllable::SyllableAnalyzer;
pub use tokenizer::{LegalitySegmenter, SegmentError, Segmenter};
