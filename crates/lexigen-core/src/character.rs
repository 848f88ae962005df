// Character classification for English phonology.

// ---------------------------------------------------------------------------
// English phonological constants
// ---------------------------------------------------------------------------

/// English vowels (lowercase): a e i o u
pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Semi-vowels: y w.
///
/// These letters sit in both camps. For all adjacency checks in lexigen
/// they count as consonants: [`is_consonant`] accepts every alphabetic
/// character that is not in [`VOWELS`], so `y` and `w` fall on the
/// consonant side there. The set is kept separate so the duality stays
/// visible at the type level.
pub const SEMI_VOWELS: &[char] = &['y', 'w'];

/// Check whether a character is an English vowel (case-insensitive).
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&simple_lower(c))
}

/// Check whether a character counts as a consonant for adjacency checks.
///
/// Any alphabetic character that is not a vowel qualifies, including the
/// semi-vowels `y` and `w`. Digits, hyphens, and other punctuation are
/// neither vowel nor consonant.
pub fn is_consonant(c: char) -> bool {
    c.is_alphabetic() && !is_vowel(c)
}

/// Simple ASCII-oriented lowercasing for single characters.
///
/// Morpheme surface forms are plain ASCII, so `to_ascii_lowercase` is
/// sufficient and avoids the one-to-many expansions of full Unicode
/// lowercasing.
pub fn simple_lower(c: char) -> char {
    c.to_ascii_lowercase()
}

/// Strip a morpheme surface form down to its letters.
///
/// Removes hyphens, combining marks, and any other non-ASCII-alphabetic
/// characters. The result may be empty (e.g. for a form that was pure
/// punctuation); callers decide whether that is an error.
pub fn clean_surface_form(form: &str) -> String {
    form.chars().filter(char::is_ascii_alphabetic).collect()
}
