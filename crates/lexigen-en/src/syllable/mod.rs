// Syllable analyzer: turns a segmenter's substring sequence into
// position-indexed syllable metadata, then applies the lone-vowel merge
// normalization.

use lexigen_core::character::is_vowel;
use lexigen_core::syllable::{SyllableMetadata, SyllableSpan};

use crate::tokenizer::{SegmentError, Segmenter};

/// Derives [`SyllableMetadata`] for surface forms.
///
/// Generic over the segmenter so the enhancement pass can run against
/// the shipped legality segmenter while contract tests drive it with
/// mocks.
#[derive(Debug, Clone)]
pub struct SyllableAnalyzer<S: Segmenter> {
    segmenter: S,
}

impl<S: Segmenter> SyllableAnalyzer<S> {
    /// Wrap a segmenter.
    pub fn new(segmenter: S) -> Self {
        Self { segmenter }
    }

    /// Segment `word` and attach `[start, end)` positions to each
    /// syllable, then merge lone vowels into their right neighbors.
    ///
    /// The empty string yields empty metadata without consulting the
    /// segmenter. Segmenter failures propagate unchanged; the
    /// enhancement pass recovers from them per entry.
    pub fn metadata(&self, word: &str) -> Result<SyllableMetadata, SegmentError> {
        if word.is_empty() {
            return Ok(SyllableMetadata::empty());
        }

        let parts = self.segmenter.segment(word)?;

        // Walk the word left to right, accumulating offsets.
        let mut spans = Vec::with_capacity(parts.len());
        let mut pos = 0;
        for part in parts {
            let span = SyllableSpan::new(part, pos);
            pos = span.end();
            spans.push(span);
        }

        let spans = merge_lone_vowels(spans);
        let meta = SyllableMetadata::from_components(spans);
        debug_assert!(meta.covers(word), "syllable spans must cover {word:?}");
        Ok(meta)
    }
}

/// Merge each single-character vowel syllable into the syllable to its
/// right.
///
/// Single forward pass: when a syllable is exactly one character, that
/// character is a vowel, and a right neighbor exists, the two fuse into
/// one span and the scan advances past both. Already-merged output is
/// never rescanned, so three lone vowels in a row collapse pairwise left
/// to right. A final lone vowel has no right neighbor and stands alone.
fn merge_lone_vowels(spans: Vec<SyllableSpan>) -> Vec<SyllableSpan> {
    if spans.len() <= 1 {
        return spans;
    }

    let mut merged = Vec::with_capacity(spans.len());
    let mut i = 0;
    while i < spans.len() {
        let is_lone_vowel = spans[i].len() == 1
            && spans[i].text.chars().next().is_some_and(is_vowel)
            && i + 1 < spans.len();
        if is_lone_vowel {
            let text = format!("{}{}", spans[i].text, spans[i + 1].text);
            merged.push(SyllableSpan {
                text,
                position: [spans[i].start(), spans[i + 1].end()],
            });
            i += 2;
        } else {
            merged.push(spans[i].clone());
            i += 1;
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A segmenter that replays a fixed split for each known word.
    struct MockSegmenter {
        entries: Vec<(String, Vec<String>)>,
    }

    impl MockSegmenter {
        fn new(entries: &[(&str, &[&str])]) -> Self {
            Self {
                entries: entries
                    .iter()
                    .map(|(w, parts)| {
                        (
                            w.to_string(),
                            parts.iter().map(|p| p.to_string()).collect(),
                        )
                    })
                    .collect(),
            }
        }
    }

    impl Segmenter for MockSegmenter {
        fn segment(&self, word: &str) -> Result<Vec<String>, SegmentError> {
            self.entries
                .iter()
                .find(|(w, _)| w == word)
                .map(|(_, parts)| parts.clone())
                .ok_or_else(|| SegmentError::NonAlphabetic(word.to_string()))
        }
    }

    #[test]
    fn positions_walk_the_word() {
        let seg = MockSegmenter::new(&[("wonderful", &["won", "der", "ful"])]);
        let meta = SyllableAnalyzer::new(seg).metadata("wonderful").unwrap();

        assert_eq!(meta.count, 3);
        assert_eq!(meta.texts(), vec!["won", "der", "ful"]);
        assert_eq!(meta.components[0].position, [0, 3]);
        assert_eq!(meta.components[1].position, [3, 6]);
        assert_eq!(meta.components[2].position, [6, 9]);
        assert!(meta.covers("wonderful"));
    }

    #[test]
    fn empty_input_is_empty_metadata() {
        let seg = MockSegmenter::new(&[]);
        let meta = SyllableAnalyzer::new(seg).metadata("").unwrap();
        assert_eq!(meta.count, 0);
        assert!(meta.components.is_empty());
    }

    #[test]
    fn lone_vowel_merges_right() {
        let seg = MockSegmenter::new(&[("again", &["a", "gain"])]);
        let meta = SyllableAnalyzer::new(seg).metadata("again").unwrap();

        assert_eq!(meta.count, 1);
        assert_eq!(meta.texts(), vec!["again"]);
        assert_eq!(meta.components[0].position, [0, 5]);
    }

    #[test]
    fn final_lone_vowel_stands_alone() {
        let seg = MockSegmenter::new(&[("idea", &["i", "de", "a"])]);
        let meta = SyllableAnalyzer::new(seg).metadata("idea").unwrap();

        // The leading "i" merges into "de"; the trailing "a" has no
        // right neighbor and is kept.
        assert_eq!(meta.texts(), vec!["ide", "a"]);
        assert_eq!(meta.components[0].position, [0, 3]);
        assert_eq!(meta.components[1].position, [3, 4]);
        assert!(meta.covers("idea"));
    }

    #[test]
    fn lone_consonant_syllable_is_kept() {
        let seg = MockSegmenter::new(&[("oboe", &["o", "b", "oe"])]);
        let meta = SyllableAnalyzer::new(seg).metadata("oboe").unwrap();

        // "o" merges with "b"; "b" itself would never merge because it
        // is not a vowel.
        assert_eq!(meta.texts(), vec!["ob", "oe"]);
        assert!(meta.covers("oboe"));
    }

    #[test]
    fn three_lone_vowels_collapse_pairwise() {
        let seg = MockSegmenter::new(&[("aeon", &["a", "e", "o", "n"])]);
        let meta = SyllableAnalyzer::new(seg).metadata("aeon").unwrap();

        // Forward pass: "a"+"e" fuse, then the scan resumes at "o",
        // which fuses with "n". The merged "ae" is not revisited.
        assert_eq!(meta.texts(), vec!["ae", "on"]);
        assert_eq!(meta.components[0].position, [0, 2]);
        assert_eq!(meta.components[1].position, [2, 4]);
    }

    #[test]
    fn single_syllable_unchanged() {
        let seg = MockSegmenter::new(&[("a", &["a"]), ("port", &["port"])]);
        let analyzer = SyllableAnalyzer::new(seg);

        // A one-character vowel word is also the last syllable: no merge.
        let meta = analyzer.metadata("a").unwrap();
        assert_eq!(meta.texts(), vec!["a"]);

        let meta = analyzer.metadata("port").unwrap();
        assert_eq!(meta.count, 1);
        assert_eq!(meta.components[0].position, [0, 4]);
    }

    #[test]
    fn segmenter_failure_propagates() {
        let seg = MockSegmenter::new(&[]);
        let err = SyllableAnalyzer::new(seg).metadata("x-y").unwrap_err();
        assert!(matches!(err, SegmentError::NonAlphabetic(_)));
    }

    #[test]
    fn default_segmenter_end_to_end() {
        let analyzer = SyllableAnalyzer::new(crate::tokenizer::LegalitySegmenter::default());
        let meta = analyzer.metadata("wonderful").unwrap();
        assert_eq!(meta.count, 3);
        assert!(meta.covers("wonderful"));
        let positions: Vec<[usize; 2]> =
            meta.components.iter().map(|c| c.position).collect();
        assert_eq!(positions, vec![[0, 3], [3, 6], [6, 9]]);
    }
}
