/// `isbn` followed by a number.
///
/// Grammar: the token, exactly one space, a digit, then any run of digits
/// and single hyphens. Hyphens are dropped from the value. A single ASCII
/// letter directly after the number is kept as a check character when it
/// ends the word.
pub struct Isbn;

impl Isbn {
    /// Matched case-sensitively, unlike every other inline token.
    pub const TOKEN: &'static str = "isbn";
    pub const HYPHEN: u8 = b'-';
    /// Longest accepted value, check character excluded.
    pub const MAX_LEN: usize = 15;

    /// Reads an ISBN reference at the start of `s`.
    ///
    /// Returns the cleaned value and the number of bytes consumed, token
    /// included, or `None` if `s` does not hold a valid reference.
    pub fn scan(s: &str) -> Option<(String, usize)> {
        let b = s.as_bytes();
        let mut i = Self::TOKEN.len();
        if b.get(i) != Some(&b' ') {
            return None;
        }
        i += 1;
        let first = *b.get(i).filter(|c| c.is_ascii_digit())?;
        let mut value = String::from(char::from(first));
        i += 1;

        while let Some(&c) = b.get(i) {
            if c.is_ascii_digit() {
                value.push(char::from(c));
            } else if c == Self::HYPHEN {
                if b.get(i + 1) == Some(&Self::HYPHEN) {
                    return None;
                }
            } else {
                break;
            }
            i += 1;
            if value.len() > Self::MAX_LEN {
                return None;
            }
        }

        if let Some(&c) = b.get(i)
            && c.is_ascii_alphabetic()
            && matches!(b.get(i + 1), None | Some(b' ' | b'\n'))
        {
            value.push(char::from(c));
            i += 1;
        }
        Some((value, i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("isbn 0-123-45678-9", Some(("0123456789", 18)))]
    #[case("isbn 0-19-852663-X rest", Some(("019852663X", 18)))]
    #[case("isbn 123X", Some(("123X", 9)))]
    #[case("isbn 123Xy", Some(("123", 8)))]
    #[case("isbn 12-, ok", Some(("12", 8)))]
    #[case("isbn 123456789012345", Some(("123456789012345", 20)))]
    fn accepted(#[case] input: &str, #[case] expected: Option<(&str, usize)>) {
        let got = Isbn::scan(input);
        assert_eq!(
            got.as_ref().map(|(v, n)| (v.as_str(), *n)),
            expected
        );
    }

    #[rstest]
    #[case("isbn")]
    #[case("isbn  123")]
    #[case("isbnx 123")]
    #[case("isbn -123")]
    #[case("isbn 12--34")]
    #[case("isbn 1234567890123456")]
    fn rejected(#[case] input: &str) {
        assert_eq!(Isbn::scan(input), None);
    }
}
