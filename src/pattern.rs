// src/pattern.rs
//! Wildcard matching for file-name components.
//!
//! Implements the shell-style subset used by `-name`/`-iname`:
//! - `*` matches zero or more characters
//! - `?` matches exactly one character
//! - every other character matches itself
//!
//! There is no escaping, so `*` and `?` cannot be matched literally.
//! Matching operates on whole characters: a multi-byte character is never
//! split, and `?` consumes exactly one of them.

#![deny(missing_docs)]

/// Decode the character starting at byte offset `at`, with its width.
#[inline]
fn decode(s: &str, at: usize) -> Option<(char, usize)> {
    s[at..].chars().next().map(|c| (c, c.len_utf8()))
}

/// Compare two characters, folding case for alphabetic characters only.
#[inline]
fn chars_equal(a: char, b: char, fold: bool) -> bool {
    if a == b {
        return true;
    }
    fold && a.is_alphabetic() && b.is_alphabetic() && a.to_lowercase().eq(b.to_lowercase())
}

/// Match `name` against `pattern`.
///
/// `ignore_case` requests case-insensitive comparison for letters;
/// `fs_ignore_case` forces it regardless, carrying the filesystem's own
/// naming policy (reported once per run by the platform layer).
///
/// Greedy scan with one backtrack checkpoint: each `*` records the pattern
/// offset after itself and the current name offset, and a later mismatch
/// re-enters there with the name offset advanced by one character. The
/// checkpoint is overwritten per `*`; shell globs never need to retry an
/// earlier star once a later one has been reached.
///
/// Pure and total: no state, no allocation, a boolean for every input.
pub fn matches(pattern: &str, name: &str, ignore_case: bool, fs_ignore_case: bool) -> bool {
    let fold = ignore_case || fs_ignore_case;

    // Byte offsets, always left on character boundaries.
    let mut p = 0;
    let mut s = 0;
    let mut checkpoint: Option<(usize, usize)> = None;

    while let Some((sc, sw)) = decode(name, s) {
        match decode(pattern, p) {
            Some(('*', pw)) => {
                checkpoint = Some((p + pw, s));
                p += pw;
                if p == pattern.len() {
                    return true; // trailing star swallows the remainder
                }
            }
            Some(('?', pw)) => {
                p += pw;
                s += sw;
            }
            Some((pc, pw)) if chars_equal(pc, sc, fold) => {
                p += pw;
                s += sw;
            }
            _ => {
                // Mismatch, or pattern exhausted while name remains: retry
                // from the last star with one more name character consumed.
                let Some((cp, cs)) = checkpoint else {
                    return false;
                };
                let Some((_, cw)) = decode(name, cs) else {
                    return false;
                };
                checkpoint = Some((cp, cs + cw));
                p = cp;
                s = cs + cw;
            }
        }
    }

    // Name exhausted: a trailing run of stars matches the empty remainder.
    while let Some(('*', pw)) = decode(pattern, p) {
        p += pw;
    }
    p == pattern.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_literals() {
        assert!(matches("hello", "hello", false, false));
        assert!(!matches("hello", "world", false, false));
        assert!(!matches("hello", "hell", false, false));
        assert!(!matches("hell", "hello", false, false));
        assert!(matches("", "", false, false));
        assert!(!matches("", "a", false, false));
    }

    #[test]
    fn star_matches_any_run_including_empty() {
        assert!(matches("*", "anything", false, false));
        assert!(matches("*", "", false, false));
        assert!(matches("hel*", "hello", false, false));
        assert!(matches("*llo", "hello", false, false));
        assert!(matches("h*o", "hello", false, false));
        assert!(matches("h*l*o", "hello", false, false));
        assert!(!matches("h*x", "hello", false, false));
        assert!(!matches("*x", "hello", false, false));
    }

    #[test]
    fn question_consumes_exactly_one() {
        assert!(matches("h?llo", "hello", false, false));
        assert!(matches("h??lo", "hello", false, false));
        assert!(matches("?????", "hello", false, false));
        assert!(!matches("h?", "hello", false, false));
        assert!(!matches("?", "", false, false));
        assert!(!matches("??", "a", false, false));
    }

    #[test]
    fn star_and_question_combined() {
        assert!(matches("h?l*o", "hello", false, false));
        assert!(matches("*?l*", "hello", false, false));
        assert!(matches("*.???", "archive.txt", false, false));
        assert!(!matches("*.???", "archive.go", false, false));
    }

    #[test]
    fn repeated_stars_backtrack() {
        assert!(matches("a*a*a*a", "aaaa", false, false));
        assert!(matches("*a*b*c", "XaYbZc", false, false));
        assert!(!matches("*a*b*c", "XaYcZb", false, false));
        assert!(matches("**", "x", false, false));
        assert!(matches("x**y", "xy", false, false));
        assert!(matches("*.tar.*", "backup.tar.gz", false, false));
    }

    #[test]
    fn trailing_stars_match_empty_remainder() {
        assert!(matches("hello*", "hello", false, false));
        assert!(matches("hello**", "hello", false, false));
        assert!(!matches("hello*x", "hello", false, false));
    }

    #[test]
    fn case_folding_is_opt_in() {
        assert!(matches("Hello", "hELLo", true, false));
        assert!(!matches("Hello", "hELLo", false, false));
        assert!(matches("*.TXT", "notes.txt", true, false));
        assert!(!matches("*.TXT", "notes.txt", false, false));
    }

    #[test]
    fn filesystem_policy_forces_folding() {
        assert!(matches("Hello", "hELLo", false, true));
        assert!(matches("Hello", "hELLo", true, true));
        assert!(matches("*.txt", "NOTES.TXT", false, true));
    }

    #[test]
    fn folding_leaves_non_letters_alone() {
        assert!(matches("a-b_c.1", "A-B_C.1", true, false));
        assert!(!matches("1", "2", true, false));
        assert!(!matches(".", ",", true, false));
    }

    #[test]
    fn multibyte_characters_stay_whole() {
        assert!(matches("テ?ト", "テスト", false, false));
        assert!(matches("テ*", "テスト", false, false));
        assert!(matches("*スト", "テスト", false, false));
        assert!(!matches("テ?", "テスト", false, false));
        assert!(matches("??", "日本", false, false));
        assert!(!matches("日", "本", false, false));
    }

    #[test]
    fn mixed_width_names() {
        assert!(matches("*.txt", "メモ.txt", false, false));
        assert!(matches("メモ*", "メモ帳.txt", false, false));
        assert!(!matches("メモ?", "メモ帳.txt", false, false));
    }

    #[test]
    fn same_inputs_same_answer() {
        for _ in 0..3 {
            assert!(matches("h*l?o", "hello", false, false));
            assert!(!matches("h*l?o", "heLLo", false, false));
        }
    }
}
