// Syllable-count word generator: weight-bucketed pools, a per-slot
// budget allocation, and bounded retry.

use rand::Rng;
use rand::seq::SliceRandom;

use lexigen_core::character::{clean_surface_form, is_vowel};
use lexigen_core::syllable::{SyllableMetadata, WeightClass};

use crate::generator::{GenerateError, GeneratedWord, MorphemeGloss, recombine};
use crate::store::{Location, MorphemeStore};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Tunable knobs for the syllable-count generator.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorOptions {
    /// Probability that a multi-syllable word gets a prefix slot.
    pub prefix_probability: f64,

    /// Retry budget per `generate` call.
    pub max_attempts: usize,

    /// Smallest accepted target syllable count.
    pub min_syllables: usize,

    /// Largest accepted target syllable count.
    pub max_syllables: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            prefix_probability: 0.7,
            max_attempts: 50,
            min_syllables: 1,
            max_syllables: 4,
        }
    }
}

// ---------------------------------------------------------------------------
// Candidate pools
// ---------------------------------------------------------------------------

/// One store entry prepared for generation: cleaned form, gloss, and the
/// precomputed syllable analysis.
#[derive(Debug, Clone)]
struct PoolEntry {
    form: String,
    meaning: Vec<String>,
    count: usize,
    syllables: SyllableMetadata,
}

impl PoolEntry {
    fn gloss(&self) -> MorphemeGloss {
        MorphemeGloss {
            form: self.form.clone(),
            meaning: self.meaning.clone(),
        }
    }
}

/// Light/heavy candidate buckets for one slot.
#[derive(Debug, Clone, Default)]
struct WeightPools {
    light: Vec<PoolEntry>,
    heavy: Vec<PoolEntry>,
}

impl WeightPools {
    fn push(&mut self, entry: PoolEntry) {
        match WeightClass::from_count(entry.count) {
            WeightClass::Light => self.light.push(entry),
            WeightClass::Heavy => self.heavy.push(entry),
        }
    }

    /// The bucket preferred for a remaining budget: heavy when at least
    /// two syllables are still unspent, light otherwise.
    fn for_budget(&self, remaining: usize) -> &[PoolEntry] {
        if remaining >= 2 {
            &self.heavy
        } else {
            &self.light
        }
    }
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// Generates words against an exact total-syllable budget.
///
/// Pools are built once from the enriched store and hold immutable
/// snapshots of the candidate entries; `generate` takes `&self` and all
/// randomness comes in through the caller's RNG, so a generator can be
/// shared across threads.
#[derive(Debug, Clone)]
pub struct SyllableWordGenerator {
    prefixes: WeightPools,
    roots: WeightPools,
    suffixes: WeightPools,
    options: GeneratorOptions,
}

impl SyllableWordGenerator {
    /// Build pools from an enriched store with default options.
    pub fn new(store: &MorphemeStore) -> Self {
        Self::with_options(store, GeneratorOptions::default())
    }

    /// Build pools from an enriched store.
    ///
    /// Each entry contributes its first form, cleaned of non-letters;
    /// entries whose cleaned form is empty are skipped. The syllable
    /// count and spans come from the entry's precomputed metadata,
    /// falling back to a single-syllable reading.
    pub fn with_options(store: &MorphemeStore, options: GeneratorOptions) -> Self {
        let mut prefixes = WeightPools::default();
        let mut roots = WeightPools::default();
        let mut suffixes = WeightPools::default();

        for (_, entry) in store.iter() {
            let Some(form) = entry.primary_form() else {
                continue;
            };
            let clean = clean_surface_form(&form.form);
            if clean.is_empty() {
                continue;
            }

            let syllables = entry
                .syllables
                .clone()
                .unwrap_or_else(|| SyllableMetadata::single(&clean));
            let pool_entry = PoolEntry {
                form: clean,
                meaning: entry.meaning.clone(),
                count: syllables.count.max(1),
                syllables,
            };

            match form.loc {
                Location::Prefix => prefixes.push(pool_entry),
                Location::Embedded => roots.push(pool_entry),
                Location::Suffix => suffixes.push(pool_entry),
            }
        }

        Self {
            prefixes,
            roots,
            suffixes,
            options,
        }
    }

    /// Generate one word with exactly `target` syllables of budget.
    ///
    /// A target outside the configured range fails immediately with
    /// [`GenerateError::ConstraintViolation`]. A one-syllable target is
    /// a single draw from the light root pool. Larger targets run the
    /// slot-allocation attempt up to `max_attempts` times; an attempt in
    /// which no slot commits is discarded and retried.
    pub fn generate<R: Rng>(
        &self,
        target: usize,
        rng: &mut R,
    ) -> Result<GeneratedWord, GenerateError> {
        let opts = &self.options;
        if target < opts.min_syllables || target > opts.max_syllables {
            return Err(GenerateError::ConstraintViolation {
                requested: target,
                min: opts.min_syllables,
                max: opts.max_syllables,
            });
        }

        if target == 1 {
            let root = self
                .roots
                .light
                .choose(rng)
                .ok_or(GenerateError::Exhausted { attempts: 1 })?;
            return Ok(GeneratedWord {
                word: root.form.clone(),
                prefix: None,
                root: Some(root.gloss()),
                suffix: None,
                syllables: root.syllables.clone(),
            });
        }

        for _ in 0..opts.max_attempts {
            if let Some(word) = self.attempt(target, rng) {
                return Ok(word);
            }
        }
        Err(GenerateError::Exhausted {
            attempts: opts.max_attempts,
        })
    }

    /// One allocation attempt: walk the slots in fixed order
    /// prefix -> root -> suffix, committing picks that fit the
    /// remaining budget.
    fn attempt<R: Rng>(&self, target: usize, rng: &mut R) -> Option<GeneratedWord> {
        let mut remaining = target;
        let mut prefix: Option<&PoolEntry> = None;
        let mut root: Option<&PoolEntry> = None;
        let mut suffix: Option<&PoolEntry> = None;

        // Prefix slot is probabilistic; a pick that overshoots the
        // budget is dropped without spending anything.
        if rng.gen_bool(self.options.prefix_probability) {
            if let Some(p) = self.prefixes.for_budget(remaining).choose(rng) {
                if p.count <= remaining {
                    remaining -= p.count;
                    prefix = Some(p);
                }
            }
        }

        if remaining > 0 {
            if let Some(r) = self.roots.for_budget(remaining).choose(rng) {
                if r.count <= remaining {
                    remaining -= r.count;
                    root = Some(r);
                }
            }
        }

        // The suffix closes the word: it must consume the remaining
        // budget exactly or not commit at all.
        if remaining > 0 {
            if let Some(s) = self.suffixes.for_budget(remaining).choose(rng) {
                if s.count == remaining {
                    suffix = Some(s);
                }
            }
        }

        let word = combine_forms(
            prefix.map_or("", |p| p.form.as_str()),
            root.map_or("", |r| r.form.as_str()),
            suffix.map_or("", |s| s.form.as_str()),
        );
        if word.is_empty() {
            return None;
        }

        let parts: Vec<&SyllableMetadata> = [&prefix, &root, &suffix]
            .into_iter()
            .flatten()
            .map(|e| &e.syllables)
            .collect();

        Some(GeneratedWord {
            word,
            prefix: prefix.map(PoolEntry::gloss),
            root: root.map(PoolEntry::gloss),
            suffix: suffix.map(PoolEntry::gloss),
            syllables: recombine(&parts),
        })
    }
}

// ---------------------------------------------------------------------------
// Boundary smoothing
// ---------------------------------------------------------------------------

/// Concatenate committed forms with boundary smoothing: a connecting
/// "o" between a consonant-final prefix and the root, and elision of
/// one copy when the root's last letter equals the suffix's first.
fn combine_forms(prefix: &str, root: &str, suffix: &str) -> String {
    let mut word = String::new();

    if !prefix.is_empty() {
        word.push_str(prefix);
        if !root.is_empty() && !prefix.chars().last().is_some_and(is_vowel) {
            word.push('o');
        }
    }

    word.push_str(root);

    if !suffix.is_empty() {
        let duplicated = root
            .chars()
            .last()
            .zip(suffix.chars().next())
            .is_some_and(|(a, b)| a == b);
        if duplicated {
            word.pop();
        }
        word.push_str(suffix);
    }

    word
}
