// Whole-database word generator: uniform draws over every form in the
// store, validated by phonological legality, boundary checks, and a
// total syllable bound. Supports theme-filtered selection.

use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::SliceRandom;

use lexigen_core::character::{is_consonant, is_vowel};
use lexigen_core::syllable::SyllableMetadata;

use crate::generator::{GenerateError, GeneratedWord, MorphemeGloss, recombine};
use crate::phonology;
use crate::store::{Location, MorphemeStore, SyllableIndex};

/// Retry budget for one generation call.
const MAX_ATTEMPTS: usize = 50;

/// Inclusive bounds on the combined syllable count.
const MIN_TOTAL_SYLLABLES: usize = 1;
const MAX_TOTAL_SYLLABLES: usize = 4;

// ---------------------------------------------------------------------------
// Theme lexicon
// ---------------------------------------------------------------------------

/// Fixed theme-to-keyword table for themed generation.
///
/// An immutable value owned by the generator; the default table carries
/// the built-in themes.
#[derive(Debug, Clone)]
pub struct ThemeLexicon {
    themes: BTreeMap<String, Vec<String>>,
}

impl Default for ThemeLexicon {
    fn default() -> Self {
        let table: &[(&str, &[&str])] = &[
            (
                "society",
                &[
                    "society", "social", "people", "community", "group", "gather", "meet",
                    "lead", "rule", "govern",
                ],
            ),
            (
                "color",
                &[
                    "color", "red", "blue", "green", "yellow", "black", "white", "bright",
                    "dark", "light", "shade",
                ],
            ),
            (
                "movement",
                &[
                    "move", "go", "come", "walk", "run", "flow", "turn", "spin", "rise", "fall",
                ],
            ),
            (
                "human_body",
                &[
                    "body", "head", "arm", "leg", "heart", "blood", "bone", "muscle", "brain",
                    "eye", "hand", "foot",
                ],
            ),
            (
                "mind",
                &[
                    "think", "know", "learn", "mind", "brain", "memory", "idea", "thought",
                    "reason", "logic",
                ],
            ),
            (
                "time",
                &[
                    "time", "year", "day", "hour", "before", "after", "early", "late", "now",
                    "then",
                ],
            ),
        ];
        let themes = table
            .iter()
            .map(|(name, words)| {
                (
                    name.to_string(),
                    words.iter().map(|w| w.to_string()).collect(),
                )
            })
            .collect();
        Self { themes }
    }
}

impl ThemeLexicon {
    /// Build a custom table from (theme, keywords) pairs.
    pub fn from_pairs<I, T, W>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (T, Vec<W>)>,
        T: Into<String>,
        W: Into<String>,
    {
        let themes = pairs
            .into_iter()
            .map(|(t, ws)| (t.into(), ws.into_iter().map(Into::into).collect()))
            .collect();
        Self { themes }
    }

    /// Keywords for a theme, or `None` for an unknown theme.
    pub fn keywords(&self, theme: &str) -> Option<&[String]> {
        self.themes.get(theme).map(Vec::as_slice)
    }

    /// The known theme names, in sorted order.
    pub fn themes(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// One candidate form for a slot.
#[derive(Debug, Clone)]
struct Candidate {
    form: String,
    meaning: Vec<String>,
}

impl Candidate {
    fn gloss(&self) -> MorphemeGloss {
        MorphemeGloss {
            form: self.form.clone(),
            meaning: self.meaning.clone(),
        }
    }

    /// Whether any whitespace-separated word of the glosses appears in
    /// the keyword set.
    fn matches_keywords(&self, keywords: &[String]) -> bool {
        self.meaning
            .join(" ")
            .to_lowercase()
            .split_whitespace()
            .any(|w| keywords.iter().any(|k| k == w))
    }
}

/// Generates words by uniform draws over the full candidate pools
/// (no weight buckets), one candidate per slot.
///
/// Unlike [`super::SyllableWordGenerator`] every form of every entry
/// joins its pool, and a drawn triple is accepted or rejected as a
/// whole: phonological legality, boundary consonant runs, and the
/// 1-4 total syllable bound, with counts looked up through the
/// precomputed [`SyllableIndex`].
#[derive(Debug, Clone)]
pub struct DatabaseWordGenerator {
    prefixes: Vec<Candidate>,
    roots: Vec<Candidate>,
    suffixes: Vec<Candidate>,
    index: SyllableIndex,
    themes: ThemeLexicon,
}

impl DatabaseWordGenerator {
    /// Build pools and the syllable index from an enriched store, with
    /// the default theme table.
    pub fn new(store: &MorphemeStore) -> Self {
        Self::with_themes(store, ThemeLexicon::default())
    }

    /// Build pools and the syllable index from an enriched store.
    pub fn with_themes(store: &MorphemeStore, themes: ThemeLexicon) -> Self {
        let mut prefixes = Vec::new();
        let mut roots = Vec::new();
        let mut suffixes = Vec::new();

        for (_, entry) in store.iter() {
            for form in &entry.forms {
                let candidate = Candidate {
                    form: form.form.clone(),
                    meaning: entry.meaning.clone(),
                };
                match form.loc {
                    Location::Prefix => prefixes.push(candidate),
                    Location::Embedded => roots.push(candidate),
                    Location::Suffix => suffixes.push(candidate),
                }
            }
        }

        Self {
            prefixes,
            roots,
            suffixes,
            index: SyllableIndex::build(store),
            themes,
        }
    }

    /// Legality check for a drawn triple. Empty slots contribute
    /// nothing to the syllable total and skip their boundary check.
    pub fn validate_triple(&self, prefix: &str, root: &str, suffix: &str) -> bool {
        let combined = format!("{prefix}{root}{suffix}");

        // A word needs at least one vowel somewhere.
        if !combined.chars().any(is_vowel) {
            return false;
        }

        if !phonology::is_valid_combination(prefix, root, suffix) {
            return false;
        }

        // No 3-consonant run crossing the prefix-root boundary.
        let root_chars: Vec<char> = root.chars().collect();
        if let Some(last) = prefix.chars().last() {
            if is_consonant(last)
                && root_chars.len() > 1
                && is_consonant(root_chars[0])
                && is_consonant(root_chars[1])
            {
                return false;
            }
        }

        // Symmetric check at the root-suffix boundary.
        if let Some(first) = suffix.chars().next() {
            let n = root_chars.len();
            if n > 1
                && is_consonant(root_chars[n - 2])
                && is_consonant(root_chars[n - 1])
                && is_consonant(first)
            {
                return false;
            }
        }

        let total = self.slot_count(prefix) + self.slot_count(root) + self.slot_count(suffix);
        (MIN_TOTAL_SYLLABLES..=MAX_TOTAL_SYLLABLES).contains(&total)
    }

    fn slot_count(&self, form: &str) -> usize {
        if form.is_empty() {
            0
        } else {
            self.index.count_of(form)
        }
    }

    /// Generate one word by uniform draws, retrying up to the attempt
    /// budget.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<GeneratedWord, GenerateError> {
        for _ in 0..MAX_ATTEMPTS {
            let (Some(prefix), Some(root), Some(suffix)) = (
                self.prefixes.choose(rng),
                self.roots.choose(rng),
                self.suffixes.choose(rng),
            ) else {
                break;
            };

            if self.validate_triple(&prefix.form, &root.form, &suffix.form) {
                return Ok(self.build(Some(prefix), Some(root), Some(suffix)));
            }
        }
        Err(GenerateError::Exhausted {
            attempts: MAX_ATTEMPTS,
        })
    }

    /// Generate up to `count` words, skipping calls that exhaust their
    /// retry budget.
    pub fn generate_many<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<GeneratedWord> {
        (0..count)
            .filter_map(|_| self.generate(rng).ok())
            .collect()
    }

    /// Generate a word restricted to a theme.
    ///
    /// `Ok(None)` is the explicit empty signal: the theme is unknown or
    /// no morpheme gloss intersects its keywords. When themed prefixes
    /// and roots both exist, a fair coin decides between using both and
    /// letting one slot fall back to the full pool; the suffix always
    /// comes from the full pool. Running out of attempts is an error,
    /// not an empty result.
    pub fn generate_themed<R: Rng>(
        &self,
        theme: &str,
        rng: &mut R,
    ) -> Result<Option<GeneratedWord>, GenerateError> {
        let Some(keywords) = self.themes.keywords(theme) else {
            return Ok(None);
        };

        let themed_prefixes: Vec<&Candidate> = self
            .prefixes
            .iter()
            .filter(|c| c.matches_keywords(keywords))
            .collect();
        let themed_roots: Vec<&Candidate> = self
            .roots
            .iter()
            .filter(|c| c.matches_keywords(keywords))
            .collect();

        if themed_prefixes.is_empty() && themed_roots.is_empty() {
            return Ok(None);
        }

        for _ in 0..MAX_ATTEMPTS {
            let (prefix, root) = if !themed_prefixes.is_empty()
                && !themed_roots.is_empty()
                && rng.gen_bool(0.5)
            {
                (
                    themed_prefixes.choose(rng).copied(),
                    themed_roots.choose(rng).copied(),
                )
            } else if !themed_prefixes.is_empty() {
                (themed_prefixes.choose(rng).copied(), self.roots.choose(rng))
            } else {
                (self.prefixes.choose(rng), themed_roots.choose(rng).copied())
            };

            let (Some(prefix), Some(root), Some(suffix)) =
                (prefix, root, self.suffixes.choose(rng))
            else {
                continue;
            };

            if self.validate_triple(&prefix.form, &root.form, &suffix.form) {
                return Ok(Some(self.build(Some(prefix), Some(root), Some(suffix))));
            }
        }
        Err(GenerateError::Exhausted {
            attempts: MAX_ATTEMPTS,
        })
    }

    /// Assemble the result: verbatim concatenation plus combined
    /// metadata looked up per component through the index.
    fn build(
        &self,
        prefix: Option<&Candidate>,
        root: Option<&Candidate>,
        suffix: Option<&Candidate>,
    ) -> GeneratedWord {
        let forms: Vec<&str> = [&prefix, &root, &suffix]
            .into_iter()
            .flatten()
            .map(|c| c.form.as_str())
            .collect();
        let word: String = forms.concat();

        let metas: Vec<SyllableMetadata> = forms
            .iter()
            .map(|f| self.index.metadata_or_single(f))
            .collect();
        let meta_refs: Vec<&SyllableMetadata> = metas.iter().collect();

        GeneratedWord {
            word,
            prefix: prefix.map(Candidate::gloss),
            root: root.map(Candidate::gloss),
            suffix: suffix.map(Candidate::gloss),
            syllables: recombine(&meta_refs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::store::{Form, MorphemeEntry};
    use lexigen_core::syllable::SyllableSpan;

    fn entry(form: &str, loc: Location, meaning: &[&str], syllables: &[&str]) -> MorphemeEntry {
        let mut components = Vec::new();
        let mut pos = 0;
        for s in syllables {
            let span = SyllableSpan::new(*s, pos);
            pos = span.end();
            components.push(span);
        }
        MorphemeEntry {
            forms: vec![Form {
                form: form.to_string(),
                loc,
                category: None,
                attach_to: None,
            }],
            meaning: meaning.iter().map(|m| m.to_string()).collect(),
            origin: "Latin".to_string(),
            syllables: Some(SyllableMetadata::from_components(components)),
        }
    }

    fn sample_store() -> MorphemeStore {
        let mut store = MorphemeStore::new();
        store.insert("re", entry("re", Location::Prefix, &["again"], &["re"]));
        store.insert(
            "trans",
            entry("trans", Location::Prefix, &["across", "move"], &["trans"]),
        );
        store.insert("port", entry("port", Location::Embedded, &["carry"], &["port"]));
        store.insert(
            "duc",
            entry("duc", Location::Embedded, &["lead"], &["duc"]),
        );
        store.insert("act", entry("act", Location::Embedded, &["do"], &["act"]));
        store.insert("er", entry("er", Location::Suffix, &["agent"], &["er"]));
        store.insert(
            "ation",
            entry("ation", Location::Suffix, &["process"], &["a", "tion"]),
        );
        store
    }

    #[test]
    fn validate_rejects_vowelless_triple() {
        let generator = DatabaseWordGenerator::new(&sample_store());
        assert!(!generator.validate_triple("", "prt", ""));
    }

    #[test]
    fn validate_rejects_triple_runs() {
        let generator = DatabaseWordGenerator::new(&sample_store());
        // "transcrat": n-s-c-r all consonants in a row.
        assert!(!generator.validate_triple("trans", "crat", "er"));
    }

    #[test]
    fn validate_boundary_consonant_runs() {
        let generator = DatabaseWordGenerator::new(&sample_store());
        // Prefix-root boundary: "n" + "dr.." makes three consonants.
        assert!(!generator.validate_triple("in", "dract", ""));
        // Root-suffix boundary: "..rt" + "l.." makes three consonants.
        assert!(!generator.validate_triple("", "port", "ly"));
        // A vowel on either side keeps the boundary legal.
        assert!(generator.validate_triple("re", "port", "er"));
    }

    #[test]
    fn validate_total_syllable_bound() {
        let generator = DatabaseWordGenerator::new(&sample_store());
        // re(1) + duc(1) + ation(2) = 4: allowed.
        assert!(generator.validate_triple("re", "duc", "ation"));

        // Six total syllables is over the bound. Build a store with a
        // heavy prefix to push past the limit; "interconducation" is
        // otherwise legal (no triple runs, clean boundaries).
        let mut store = sample_store();
        store.insert(
            "intercon",
            entry(
                "intercon",
                Location::Prefix,
                &["between"],
                &["in", "ter", "con"],
            ),
        );
        let generator = DatabaseWordGenerator::new(&store);
        assert!(!generator.validate_triple("intercon", "duc", "ation"));
    }

    #[test]
    fn unknown_form_counts_as_one_syllable() {
        let generator = DatabaseWordGenerator::new(&sample_store());
        // "zebra" is not in the store: defaults to 1 syllable, so the
        // total stays within bounds.
        assert!(generator.validate_triple("re", "zebra", "er"));
    }

    #[test]
    fn generate_produces_valid_words() {
        let generator = DatabaseWordGenerator::new(&sample_store());

        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let word = generator.generate(&mut rng).unwrap();

            assert_eq!(
                word.word,
                format!(
                    "{}{}{}",
                    word.prefix.as_ref().unwrap().form,
                    word.root.as_ref().unwrap().form,
                    word.suffix.as_ref().unwrap().form
                )
            );
            assert!((1..=4).contains(&word.syllables.count));
        }
    }

    #[test]
    fn generate_exhausts_on_impossible_pools() {
        let mut store = MorphemeStore::new();
        // Vowel-free forms everywhere: no draw can ever validate.
        store.insert("str", entry("str", Location::Prefix, &["strong"], &["str"]));
        store.insert("prt", entry("prt", Location::Embedded, &["part"], &["prt"]));
        store.insert("kst", entry("kst", Location::Suffix, &["cast"], &["kst"]));
        let generator = DatabaseWordGenerator::new(&store);

        let mut rng = StdRng::seed_from_u64(5);
        let err = generator.generate(&mut rng).unwrap_err();
        assert!(matches!(err, GenerateError::Exhausted { attempts: 50 }));
    }

    #[test]
    fn generate_many_collects_successes() {
        let generator = DatabaseWordGenerator::new(&sample_store());
        let mut rng = StdRng::seed_from_u64(9);
        let words = generator.generate_many(5, &mut rng);
        assert_eq!(words.len(), 5);
    }

    #[test]
    fn themed_empty_theme_is_none_not_error() {
        let generator = DatabaseWordGenerator::new(&sample_store());
        let mut rng = StdRng::seed_from_u64(2);

        // Unknown theme name.
        assert!(generator.generate_themed("cuisine", &mut rng).unwrap().is_none());
        // Known theme, but no gloss in the sample store mentions color.
        assert!(generator.generate_themed("color", &mut rng).unwrap().is_none());
    }

    #[test]
    fn themed_generation_uses_matching_morphemes() {
        let generator = DatabaseWordGenerator::new(&sample_store());

        // "trans" glosses as "across, move": only it matches the
        // movement theme, so every themed word must carry it.
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let word = generator
                .generate_themed("movement", &mut rng)
                .unwrap()
                .expect("movement theme has matching morphemes");
            assert_eq!(word.prefix.as_ref().unwrap().form, "trans");
        }
    }

    #[test]
    fn custom_theme_table() {
        let themes = ThemeLexicon::from_pairs([("cargo", vec!["carry", "load"])]);
        let generator = DatabaseWordGenerator::with_themes(&sample_store(), themes);

        // "port" glosses as "carry": the custom theme picks it up.
        let mut rng = StdRng::seed_from_u64(13);
        let word = generator
            .generate_themed("cargo", &mut rng)
            .unwrap()
            .expect("cargo theme matches the port root");
        assert_eq!(word.root.as_ref().unwrap().form, "port");
    }

    #[test]
    fn theme_lexicon_defaults() {
        let themes = ThemeLexicon::default();
        let names: Vec<&str> = themes.themes().collect();
        assert_eq!(
            names,
            vec!["color", "human_body", "mind", "movement", "society", "time"]
        );
        assert!(themes.keywords("mind").unwrap().contains(&"idea".to_string()));
        assert!(themes.keywords("nope").is_none());
    }
}
