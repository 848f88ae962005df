// Enhancement pass: one-shot batch transform from a raw morpheme store
// to the enriched store with syllable metadata attached.
//
// The pass is idempotent -- segmentation depends only on each entry's
// first form text, so re-running it over already-enhanced data
// reproduces the same spans (and, with the store's deterministic
// serialization, the same bytes).

use lexigen_core::SyllableMetadata;

use crate::store::{MorphemeEntry, MorphemeStore};
use crate::syllable::SyllableAnalyzer;
use crate::tokenizer::Segmenter;

/// One entry the pass could not analyze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Store key of the entry.
    pub key: String,
    /// Why segmentation failed.
    pub reason: String,
}

/// Outcome summary of an enhancement run.
///
/// Partial success is expected: entries whose form cannot be segmented
/// are carried through without syllable metadata and listed here.
#[derive(Debug, Clone, Default)]
pub struct EnhanceReport {
    /// Entries analyzed successfully (or legitimately lacking forms).
    pub processed: usize,
    /// Total entries in the input store.
    pub total: usize,
    /// Entries whose first form could not be segmented.
    pub skipped: Vec<SkippedEntry>,
}

/// Enhance a raw store: recompute syllable metadata for every entry's
/// first form and keep only the canonical fields.
///
/// Per entry the output preserves exactly `{forms, meaning, origin}`
/// plus the freshly computed `syllables`; any stale analysis on the
/// input is discarded and recomputed. Entries without forms pass
/// through with `syllables` omitted. A segmentation failure is recorded
/// in the report and the entry is kept without metadata -- a bad entry
/// never aborts the batch.
///
/// `progress(done, total)` is invoked once per entry, in key order.
pub fn enhance<S: Segmenter>(
    raw: &MorphemeStore,
    analyzer: &SyllableAnalyzer<S>,
    mut progress: impl FnMut(usize, usize),
) -> (MorphemeStore, EnhanceReport) {
    let total = raw.len();
    let mut enriched = MorphemeStore::new();
    let mut report = EnhanceReport {
        total,
        ..EnhanceReport::default()
    };

    for (done, (key, entry)) in raw.iter().enumerate() {
        let (syllables, failure) = match entry.primary_form() {
            Some(form) => match analyzer.metadata(&form.form) {
                Ok(meta) => (Some(meta), None),
                Err(e) => (None, Some(e.to_string())),
            },
            None => (None, None),
        };

        match failure {
            Some(reason) => report.skipped.push(SkippedEntry {
                key: key.to_string(),
                reason,
            }),
            None => report.processed += 1,
        }

        enriched.insert(key, cleaned_entry(entry, syllables));
        progress(done + 1, total);
    }

    (enriched, report)
}

/// Rebuild an entry from its canonical fields only.
fn cleaned_entry(entry: &MorphemeEntry, syllables: Option<SyllableMetadata>) -> MorphemeEntry {
    MorphemeEntry {
        forms: entry.forms.clone(),
        meaning: entry.meaning.clone(),
        origin: entry.origin.clone(),
        syllables,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Form, Location};
    use crate::tokenizer::LegalitySegmenter;

    fn entry(form: &str, loc: Location, meaning: &[&str]) -> MorphemeEntry {
        MorphemeEntry {
            forms: vec![Form {
                form: form.to_string(),
                loc,
                category: None,
                attach_to: None,
            }],
            meaning: meaning.iter().map(|m| m.to_string()).collect(),
            origin: "Latin".to_string(),
            syllables: None,
        }
    }

    fn raw_store() -> MorphemeStore {
        let mut store = MorphemeStore::new();
        store.insert("counter", entry("counter", Location::Prefix, &["against"]));
        store.insert("port", entry("port", Location::Embedded, &["carry"]));
        store.insert("able", entry("-able", Location::Suffix, &["capable"]));
        store.insert(
            "formless",
            MorphemeEntry {
                forms: Vec::new(),
                meaning: vec!["placeholder".to_string()],
                origin: "Greek".to_string(),
                syllables: None,
            },
        );
        store
    }

    fn analyzer() -> SyllableAnalyzer<LegalitySegmenter> {
        SyllableAnalyzer::new(LegalitySegmenter::default())
    }

    #[test]
    fn attaches_metadata_per_entry() {
        let (enriched, report) = enhance(&raw_store(), &analyzer(), |_, _| {});

        assert_eq!(report.total, 4);
        assert_eq!(report.processed, 3);

        let counter = enriched.get("counter").unwrap();
        let meta = counter.syllables.as_ref().unwrap();
        assert_eq!(meta.count, 2);
        assert!(meta.covers("counter"));

        let port = enriched.get("port").unwrap();
        assert_eq!(port.syllables.as_ref().unwrap().count, 1);
    }

    #[test]
    fn unsegmentable_form_is_reported_not_fatal() {
        let (enriched, report) = enhance(&raw_store(), &analyzer(), |_, _| {});

        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].key, "able");

        // The entry itself survives, just without metadata.
        let able = enriched.get("able").unwrap();
        assert!(able.syllables.is_none());
        assert_eq!(able.meaning, vec!["capable"]);
    }

    #[test]
    fn formless_entry_passes_through() {
        let (enriched, report) = enhance(&raw_store(), &analyzer(), |_, _| {});

        let formless = enriched.get("formless").unwrap();
        assert!(formless.syllables.is_none());
        assert!(formless.forms.is_empty());
        // Lacking forms is not a failure.
        assert!(report.skipped.iter().all(|s| s.key != "formless"));
    }

    #[test]
    fn stale_metadata_is_recomputed() {
        let mut store = raw_store();
        let mut tainted = entry("port", Location::Embedded, &["carry"]);
        tainted.syllables = Some(SyllableMetadata {
            count: 9,
            components: Vec::new(),
        });
        store.insert("port", tainted);

        let (enriched, _) = enhance(&store, &analyzer(), |_, _| {});
        assert_eq!(enriched.get("port").unwrap().syllables.as_ref().unwrap().count, 1);
    }

    #[test]
    fn idempotent_over_its_own_output() {
        let (once, _) = enhance(&raw_store(), &analyzer(), |_, _| {});
        let (twice, report) = enhance(&once, &analyzer(), |_, _| {});

        assert_eq!(once, twice);
        assert_eq!(
            once.to_json_pretty().unwrap(),
            twice.to_json_pretty().unwrap()
        );
        assert_eq!(report.total, 4);
    }

    #[test]
    fn progress_runs_once_per_entry() {
        let mut calls = Vec::new();
        let _ = enhance(&raw_store(), &analyzer(), |done, total| {
            calls.push((done, total));
        });
        assert_eq!(calls, vec![(1, 4), (2, 4), (3, 4), (4, 4)]);
    }
}
