// Phonological rule engine: pure predicates and transforms over
// morpheme surface forms.
//
// All checks are case-insensitive. The consonant side of every
// adjacency check uses `is_consonant`, which counts any non-vowel
// letter (including the semi-vowels y and w) as a consonant.

use lexigen_core::character::{is_consonant, is_vowel, simple_lower};

/// Longest vowel or consonant run allowed in a combined word.
const MAX_RUN: usize = 2;

/// True iff `word` contains three or more consecutive vowels.
///
/// Run-length scan; any non-vowel character resets the run.
pub fn has_triple_vowels(word: &str) -> bool {
    has_triple_run(word, is_vowel)
}

/// True iff `word` contains three or more consecutive consonants.
pub fn has_triple_consonants(word: &str) -> bool {
    has_triple_run(word, is_consonant)
}

fn has_triple_run(word: &str, pred: fn(char) -> bool) -> bool {
    let mut run = 0;
    for c in word.chars().map(simple_lower) {
        if pred(c) {
            run += 1;
            if run > MAX_RUN {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}

/// Whether the root's trailing "e" must be elided before suffixation.
///
/// Fires when the root ends in "e" and the suffix begins with "i" or
/// "a" (write + ing -> writing).
pub fn should_drop_final_e(root: &str, suffix: &str) -> bool {
    let root_ends_e = root
        .chars()
        .last()
        .is_some_and(|c| simple_lower(c) == 'e');
    let suffix_starts_ia = suffix
        .chars()
        .next()
        .is_some_and(|c| matches!(simple_lower(c), 'i' | 'a'));
    root_ends_e && suffix_starts_ia
}

/// Whether the root's final consonant should be doubled before
/// suffixation.
///
/// Fires when the root's last three characters form
/// consonant-vowel-consonant (cat + ing -> catting). The suffix's own
/// shape is not consulted, only its presence.
pub fn should_double_consonant(root: &str, suffix: &str) -> bool {
    if root.is_empty() || suffix.is_empty() {
        return false;
    }
    let chars: Vec<char> = root.chars().map(simple_lower).collect();
    let n = chars.len();
    n >= 3 && is_consonant(chars[n - 1]) && is_vowel(chars[n - 2]) && is_consonant(chars[n - 3])
}

/// Legality gate for a prefix/root/suffix triple: the concatenation must
/// not contain a 3+ vowel run or a 3+ consonant run.
///
/// Necessary but not sufficient -- the generators layer syllable-count
/// and boundary checks on top.
pub fn is_valid_combination(prefix: &str, root: &str, suffix: &str) -> bool {
    let word = format!("{prefix}{root}{suffix}");
    !has_triple_vowels(&word) && !has_triple_consonants(&word)
}

/// Apply the boundary-adjustment rules to a triple, returning the
/// possibly modified forms.
///
/// The e-drop test is evaluated against the original root; the doubling
/// test then runs against the (possibly already e-dropped) root. Both
/// rules may apply to the same triple.
pub fn apply_phonological_rules(
    prefix: &str,
    root: &str,
    suffix: &str,
) -> (String, String, String) {
    let mut root = root.to_string();

    if should_drop_final_e(&root, suffix) {
        root.pop();
    }

    if should_double_consonant(&root, suffix) {
        if let Some(last) = root.chars().last() {
            root.push(last);
        }
    }

    (prefix.to_string(), root, suffix.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triple_vowels_detected() {
        assert!(has_triple_vowels("beautiful")); // eau
        assert!(has_triple_vowels("AEIou"));
        assert!(!has_triple_vowels("reaction"));
        assert!(!has_triple_vowels(""));
    }

    #[test]
    fn vowel_run_resets_on_consonant() {
        // Two vowels, consonant, two vowels: never three in a row.
        assert!(!has_triple_vowels("aabaa"));
    }

    #[test]
    fn triple_consonants_detected() {
        assert!(has_triple_consonants("strong")); // str
        assert!(!has_triple_consonants("basic"));
        assert!(!has_triple_consonants(""));
    }

    #[test]
    fn semi_vowels_count_toward_consonant_runs() {
        // r-w-n: three consonants once w is counted as one.
        assert!(has_triple_consonants("carwnet"));
    }

    #[test]
    fn drop_final_e_cases() {
        assert!(should_drop_final_e("write", "ing"));
        assert!(should_drop_final_e("note", "able"));
        assert!(!should_drop_final_e("write", "s"));
        assert!(!should_drop_final_e("act", "ing"));
        assert!(!should_drop_final_e("write", ""));
    }

    #[test]
    fn double_consonant_cvc() {
        assert!(should_double_consonant("cat", "er"));
        assert!(should_double_consonant("permit", "ed"));
        assert!(!should_double_consonant("go", "ing")); // too short
        assert!(!should_double_consonant("port", "er")); // r-t: CC ending
        assert!(!should_double_consonant("tree", "ing")); // ends in vowel
    }

    #[test]
    fn double_consonant_needs_both_parts() {
        assert!(!should_double_consonant("", "er"));
        assert!(!should_double_consonant("cat", ""));
    }

    #[test]
    fn combination_gate() {
        assert!(is_valid_combination("re", "port", "er"));
        // "un" + "act": "una ct" has no triple run either way.
        assert!(is_valid_combination("un", "act", "ed"));
        // prefix ending in a consonant cluster against a consonant-
        // initial root produces an illegal run.
        assert!(!is_valid_combination("ex", "spect", "s")); // x-s-p
        assert!(!is_valid_combination("re", "idea", "ous")); // a-o-u
    }

    #[test]
    fn apply_rules_drop_then_double() {
        // e-drop only: "tast" ends s-t, so no doubling follows.
        let (p, r, s) = apply_phonological_rules("re", "taste", "ing");
        assert_eq!((p.as_str(), r.as_str(), s.as_str()), ("re", "tast", "ing"));

        // Doubling only.
        let (_, r, _) = apply_phonological_rules("", "cat", "er");
        assert_eq!(r, "catt");

        // Both: the doubling test runs against the e-dropped root, so
        // "write" + "ing" -> "writ" (r-i-t, CVC) -> "writt".
        let (_, r, _) = apply_phonological_rules("", "write", "ing");
        assert_eq!(r, "writt");
    }

    #[test]
    fn apply_rules_no_change() {
        let (p, r, s) = apply_phonological_rules("un", "act", "s");
        assert_eq!((p.as_str(), r.as_str(), s.as_str()), ("un", "act", "s"));
    }
}
