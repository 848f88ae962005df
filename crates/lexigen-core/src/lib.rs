//! Shared types and character utilities for the lexigen workspace.
//!
//! This crate holds the leaf pieces every other lexigen crate needs:
//!
//! - [`character`] -- English vowel/consonant classification and
//!   surface-form cleaning
//! - [`syllable`] -- the syllable data model ([`SyllableSpan`],
//!   [`SyllableMetadata`], [`WeightClass`]) shared between the analyzer,
//!   the enriched store format, and the word generators

pub mod character;
pub mod syllable;

pub use syllable::{SyllableMetadata, SyllableSpan, WeightClass};
