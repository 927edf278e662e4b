//! Line-ending normalization.
//!
//! Input may arrive with any of four newline conventions. The dominant one is
//! detected and rewritten to bare `\n` before parsing starts; every later
//! stage only ever looks for `\n`.

use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// `\n`
    Lf,
    /// `\r`
    Cr,
    /// `\r\n`
    CrLf,
    /// `\n\r`
    LfCr,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Counts {
    lf: usize,
    cr: usize,
    crlf: usize,
    lfcr: usize,
}

impl LineEnding {
    /// Picks the convention that strictly outnumbers each of the other three.
    ///
    /// Ties, or no line endings at all, fall back to [`LineEnding::Lf`].
    pub fn detect(s: &str) -> Self {
        let c = count(s.as_bytes());
        if c.cr > c.lf && c.cr > c.crlf && c.cr > c.lfcr {
            LineEnding::Cr
        } else if c.crlf > c.lf && c.crlf > c.cr && c.crlf > c.lfcr {
            LineEnding::CrLf
        } else if c.lfcr > c.lf && c.lfcr > c.cr && c.lfcr > c.crlf {
            LineEnding::LfCr
        } else {
            LineEnding::Lf
        }
    }
}

fn count(b: &[u8]) -> Counts {
    let mut c = Counts::default();
    let mut i = 0;
    while i < b.len() {
        match (b[i], b.get(i + 1)) {
            (b'\n', Some(b'\r')) => {
                c.lfcr += 1;
                i += 1;
            }
            (b'\n', _) => c.lf += 1,
            (b'\r', Some(b'\n')) => {
                c.crlf += 1;
                i += 1;
            }
            (b'\r', _) => c.cr += 1,
            _ => {}
        }
        i += 1;
    }
    c
}

/// Rewrites `s` so that lines end in `\n` only.
///
/// - `Cr`: every `\r` becomes `\n` and stray `\n` are dropped.
/// - `CrLf` / `LfCr`: every `\r` is dropped.
/// - `Lf`: input is returned untouched.
pub fn normalize(s: &str) -> Cow<'_, str> {
    match LineEnding::detect(s) {
        LineEnding::Lf => Cow::Borrowed(s),
        LineEnding::Cr => Cow::Owned(
            s.chars()
                .filter(|&c| c != '\n')
                .map(|c| if c == '\r' { '\n' } else { c })
                .collect(),
        ),
        LineEnding::CrLf | LineEnding::LfCr => Cow::Owned(s.replace('\r', "")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a\nb\nc", LineEnding::Lf)]
    #[case("a\rb\rc", LineEnding::Cr)]
    #[case("a\r\nb\r\nc", LineEnding::CrLf)]
    #[case("a\n\rb\n\rc", LineEnding::LfCr)]
    #[case("no newlines", LineEnding::Lf)]
    #[case("", LineEnding::Lf)]
    fn detects_dominant_convention(#[case] input: &str, #[case] expected: LineEnding) {
        assert_eq!(LineEnding::detect(input), expected);
    }

    #[test]
    fn tie_defaults_to_lf() {
        // one CR and one CRLF: neither wins strictly
        assert_eq!(LineEnding::detect("a\rb\r\nc"), LineEnding::Lf);
    }

    #[test]
    fn lf_input_is_borrowed() {
        assert!(matches!(normalize("a\nb"), Cow::Borrowed("a\nb")));
    }

    #[test]
    fn cr_input_becomes_lf_and_drops_stray_lf() {
        assert_eq!(normalize("a\rb\rc\nd\r"), "a\nb\ncd\n");
    }

    #[test]
    fn crlf_input_drops_cr() {
        assert_eq!(normalize("a\r\nb\r\n\r\nc"), "a\nb\n\nc");
    }

    #[test]
    fn lfcr_input_drops_cr() {
        assert_eq!(normalize("a\n\rb\n\r"), "a\nb\n");
    }

    #[test]
    fn consecutive_crlf_pairs_are_counted_separately() {
        assert_eq!(
            count(b"\r\n\r\n"),
            Counts {
                crlf: 2,
                ..Counts::default()
            }
        );
    }
}
