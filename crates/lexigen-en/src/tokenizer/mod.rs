// Syllable segmentation contract and the default legality-based
// segmenter.
//
// The analyzer and enhancement pass consume segmentation through the
// `Segmenter` trait; everything above this module is agnostic to how
// boundaries are found. The shipped `LegalitySegmenter` places one
// syllable per vowel group and splits each intervocalic consonant
// cluster so that the longest legal onset starts the following
// syllable. Onset legality comes either from the built-in English onset
// table or from the word-initial clusters of a reference word list.

use lexigen_core::character::{is_vowel, simple_lower};

// ---------------------------------------------------------------------------
// Segmenter contract
// ---------------------------------------------------------------------------

/// Error type for syllable segmentation.
#[derive(Debug, thiserror::Error)]
pub enum SegmentError {
    /// The form contains characters outside a-z/A-Z.
    #[error("cannot segment non-alphabetic form {0:?}")]
    NonAlphabetic(String),

    /// The form is empty.
    #[error("cannot segment an empty form")]
    EmptyForm,
}

/// A syllable-boundary tokenizer.
///
/// Contract: the returned substrings are non-empty, ordered left to
/// right, and concatenate to `word` exactly. How boundaries are chosen
/// is up to the implementation.
pub trait Segmenter {
    /// Split `word` into an ordered sequence of syllable substrings.
    fn segment(&self, word: &str) -> Result<Vec<String>, SegmentError>;
}

impl<S: Segmenter + ?Sized> Segmenter for &S {
    fn segment(&self, word: &str) -> Result<Vec<String>, SegmentError> {
        (**self).segment(word)
    }
}

// ---------------------------------------------------------------------------
// Reference lexicon (word-membership oracle)
// ---------------------------------------------------------------------------

/// A reference word list: answers word membership and supplies the
/// word-initial consonant clusters that parameterize the default
/// segmenter.
#[derive(Debug, Clone, Default)]
pub struct ReferenceLexicon {
    words: hashbrown::HashSet<String>,
}

impl ReferenceLexicon {
    /// Build a lexicon from an iterator of words (stored lowercase).
    pub fn from_words<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_ascii_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Whether `word` appears in the reference list (case-insensitive).
    pub fn is_known_word(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_lowercase())
    }

    /// Number of words in the lexicon.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the lexicon is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The consonant clusters observed word-initially in the lexicon.
    ///
    /// For each word, the run of consonants before its first vowel (if
    /// non-empty and shorter than the whole word) is a legal onset.
    pub fn onsets(&self) -> hashbrown::HashSet<String> {
        let mut onsets = hashbrown::HashSet::new();
        for word in &self.words {
            let cluster: String = word.chars().take_while(|&c| !is_vowel(c)).collect();
            if !cluster.is_empty() && cluster.chars().count() < word.chars().count() {
                onsets.insert(cluster);
            }
        }
        onsets
    }
}

// ---------------------------------------------------------------------------
// Built-in English onsets
// ---------------------------------------------------------------------------

/// Consonant clusters that may begin an English syllable.
///
/// Single consonants are always legal onsets and are not listed here.
const ENGLISH_ONSETS: &[&str] = &[
    "bl", "br", "ch", "cl", "cr", "dr", "dw", "fl", "fr", "gl", "gn", "gr", "kn", "ph", "pl",
    "pr", "qu", "rh", "sc", "sh", "sk", "sl", "sm", "sn", "sp", "st", "sw", "th", "tr", "tw",
    "wh", "wr", "sch", "scr", "shr", "spl", "spr", "squ", "str", "thr",
];

// ---------------------------------------------------------------------------
// LegalitySegmenter
// ---------------------------------------------------------------------------

/// The default syllable segmenter.
///
/// One syllable per vowel group; the consonants between two vowel groups
/// are split so that the longest cluster-suffix that is a legal onset
/// begins the next syllable (the rest closes the previous one). When no
/// suffix of the cluster is a legal onset the whole cluster closes the
/// previous syllable. Words without any vowel come back as a single
/// syllable.
#[derive(Debug, Clone)]
pub struct LegalitySegmenter {
    onsets: hashbrown::HashSet<String>,
}

impl Default for LegalitySegmenter {
    /// Segmenter over the built-in English onset table.
    fn default() -> Self {
        Self {
            onsets: ENGLISH_ONSETS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl LegalitySegmenter {
    /// Build a segmenter whose onset legality comes from a reference
    /// word list, merged over the built-in table.
    pub fn from_lexicon(lexicon: &ReferenceLexicon) -> Self {
        let mut seg = Self::default();
        seg.onsets.extend(lexicon.onsets());
        seg
    }

    /// Whether `cluster` may begin a syllable.
    fn is_legal_onset(&self, cluster: &str) -> bool {
        cluster.chars().count() == 1 || self.onsets.contains(cluster)
    }

    /// Pick the boundary inside an intervocalic consonant cluster.
    ///
    /// Returns how many trailing consonants of the cluster move to the
    /// next syllable: the longest legal onset suffix, or 0 when none is.
    fn onset_len(&self, cluster: &[char]) -> usize {
        for take in (1..=cluster.len()).rev() {
            let suffix: String = cluster[cluster.len() - take..].iter().collect();
            if self.is_legal_onset(&suffix) {
                return take;
            }
        }
        0
    }
}

impl Segmenter for LegalitySegmenter {
    fn segment(&self, word: &str) -> Result<Vec<String>, SegmentError> {
        if word.is_empty() {
            return Err(SegmentError::EmptyForm);
        }
        if !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(SegmentError::NonAlphabetic(word.to_string()));
        }

        let chars: Vec<char> = word.chars().collect();
        let lower: Vec<char> = chars.iter().map(|&c| simple_lower(c)).collect();

        // Locate the maximal vowel runs; each starts one syllable.
        let mut groups: Vec<(usize, usize)> = Vec::new();
        let mut i = 0;
        while i < lower.len() {
            if is_vowel(lower[i]) {
                let start = i;
                while i < lower.len() && is_vowel(lower[i]) {
                    i += 1;
                }
                groups.push((start, i));
            } else {
                i += 1;
            }
        }

        if groups.len() <= 1 {
            return Ok(vec![word.to_string()]);
        }

        // A boundary between consecutive vowel groups falls inside the
        // consonant cluster separating them.
        let mut boundaries: Vec<usize> = Vec::new();
        for pair in groups.windows(2) {
            let (_, prev_end) = pair[0];
            let (next_start, _) = pair[1];
            let cluster = &lower[prev_end..next_start];
            let onset = self.onset_len(cluster);
            boundaries.push(next_start - onset);
        }

        let mut syllables = Vec::with_capacity(boundaries.len() + 1);
        let mut start = 0;
        for &b in &boundaries {
            syllables.push(chars[start..b].iter().collect());
            start = b;
        }
        syllables.push(chars[start..].iter().collect());
        Ok(syllables)
    }
}
