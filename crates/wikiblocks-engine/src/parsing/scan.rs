//! Byte-level search helpers.
//!
//! Every token the grammar knows is ASCII, so matching on bytes never lands
//! inside a multi-byte character and the returned offsets are always valid
//! `str` boundaries.

/// Whether `hay[at..]` starts with `pat`, ignoring ASCII case.
pub fn starts_with_ci(hay: &[u8], at: usize, pat: &str) -> bool {
    let pat = pat.as_bytes();
    hay.get(at..at + pat.len())
        .is_some_and(|window| window.eq_ignore_ascii_case(pat))
}

/// Whether `hay[at..]` starts with `pat` exactly.
pub fn starts_with(hay: &[u8], at: usize, pat: &str) -> bool {
    hay.get(at..).is_some_and(|rest| rest.starts_with(pat.as_bytes()))
}

/// First offset `>= from` where `pat` occurs in `hay`, ignoring ASCII case.
pub fn find_ci(hay: &[u8], from: usize, pat: &str) -> Option<usize> {
    let n = pat.len();
    if n == 0 || hay.len() < n {
        return None;
    }
    (from..=hay.len() - n).find(|&i| starts_with_ci(hay, i, pat))
}

/// Offset of the first `\n` at or after `from`, or `s.len()` if there is none.
pub fn line_end(s: &str, from: usize) -> usize {
    s[from..].find('\n').map_or(s.len(), |i| from + i)
}

/// Offset just past the line starting at or containing `from`, newline included.
pub fn next_line(s: &str, from: usize) -> usize {
    let eol = line_end(s, from);
    if eol < s.len() { eol + 1 } else { eol }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("<NoWiki>x", 0, "<nowiki>", true)]
    #[case("ab<br>", 2, "<br", true)]
    #[case("<b", 0, "<b>", false)]
    #[case("abc", 5, "a", false)]
    fn case_insensitive_prefix(
        #[case] hay: &str,
        #[case] at: usize,
        #[case] pat: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(starts_with_ci(hay.as_bytes(), at, pat), expected);
    }

    #[test]
    fn exact_prefix_respects_case() {
        assert!(starts_with(b"isbn 1", 0, "isbn"));
        assert!(!starts_with(b"ISBN 1", 0, "isbn"));
    }

    #[test]
    fn find_ci_from_offset() {
        let hay = b"{{a}} {{b}}";
        assert_eq!(find_ci(hay, 0, "}}"), Some(3));
        assert_eq!(find_ci(hay, 4, "}}"), Some(9));
        assert_eq!(find_ci(hay, 10, "}}"), None);
        assert_eq!(find_ci(b"x</NOWIKI>", 0, "</nowiki>"), Some(1));
    }

    #[test]
    fn find_ci_past_end_is_none() {
        assert_eq!(find_ci(b"ab", 5, "a"), None);
        assert_eq!(find_ci(b"a", 0, "ab"), None);
    }

    #[test]
    fn line_bounds() {
        let s = "one\ntwo";
        assert_eq!(line_end(s, 0), 3);
        assert_eq!(next_line(s, 0), 4);
        assert_eq!(line_end(s, 4), 7);
        assert_eq!(next_line(s, 4), 7);
    }
}
