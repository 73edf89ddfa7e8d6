//! Version range expression parsing
//!
//! Parses the range expression a template leaves in `requires-python`.
//! Supported shapes:
//! - Bounded: `3.9-3.12`
//! - Lower bound only: `3.10-`
//! - Upper bound only: `-3.12`
//! - Single version: `3.11`
//! - Resolved form: `>=3.10` (what the rewrite itself emits)

/// Inclusive range of Python 3 minor versions, either bound optional
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionRange {
    /// Lower bound minor version (the 10 in "3.10")
    pub min: Option<u32>,
    /// Upper bound minor version
    pub max: Option<u32>,
}

impl VersionRange {
    /// Parse a range expression.
    ///
    /// The expression is split on the first `-`; each side contributes a
    /// bound when it starts with `3.<minor>`, and is ignored otherwise.
    /// Without a separator the single version bounds both ends, except for
    /// the `>=3.<minor>` form which declares only a lower bound. Parsing
    /// never fails; garbage input yields a range with both bounds absent.
    pub fn parse(expression: &str) -> Self {
        let expression = expression.trim();

        if let Some((low, high)) = expression.split_once('-') {
            return Self {
                min: minor_component(low.trim()),
                max: minor_component(high.trim()),
            };
        }

        if let Some(rest) = expression.strip_prefix(">=") {
            return Self {
                min: minor_component(rest.trim()),
                max: None,
            };
        }

        let minor = minor_component(expression);
        Self {
            min: minor,
            max: minor,
        }
    }

    /// Both bounds are known, so the range resolves without registry data
    pub fn is_bounded(&self) -> bool {
        self.min.is_some() && self.max.is_some()
    }
}

/// Extract the minor number from a token starting with `3.<digits>`.
///
/// Trailing characters after the digits are ignored, so "3.10.2" and
/// "3.10rc1" both yield 10.
pub(crate) fn minor_component(token: &str) -> Option<u32> {
    let rest = token.strip_prefix("3.")?;
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    rest[..digits_end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("3.9-3.12", Some(9), Some(12))]
    #[case("3.10-", Some(10), None)]
    #[case("-3.12", None, Some(12))]
    #[case("3.11", Some(11), Some(11))]
    #[case(">=3.10", Some(10), None)]
    #[case(" 3.9 - 3.12 ", Some(9), Some(12))]
    #[case("3.10.2-3.12rc1", Some(10), Some(12))]
    #[case("2.7-3.4", None, Some(4))]
    #[case("3-3.11", None, Some(11))]
    #[case("3.8-three", Some(8), None)]
    #[case("latest", None, None)]
    #[case("", None, None)]
    #[case("-", None, None)]
    fn parse_extracts_expected_bounds(
        #[case] expression: &str,
        #[case] min: Option<u32>,
        #[case] max: Option<u32>,
    ) {
        assert_eq!(VersionRange::parse(expression), VersionRange { min, max });
    }

    #[test]
    fn parse_keeps_text_after_second_separator_on_the_upper_side() {
        // Only the first `-` splits; the upper token still starts with 3.12
        let range = VersionRange::parse("3.9-3.12-extra");
        assert_eq!(range, VersionRange { min: Some(9), max: Some(12) });
    }

    #[rstest]
    #[case("3.9-3.12", true)]
    #[case("3.11", true)]
    #[case("3.10-", false)]
    #[case(">=3.10", false)]
    #[case("oops", false)]
    fn is_bounded_requires_both_ends(#[case] expression: &str, #[case] expected: bool) {
        assert_eq!(VersionRange::parse(expression).is_bounded(), expected);
    }

    #[rstest]
    #[case("3.12", Some(12))]
    #[case("3.12.4", Some(12))]
    #[case("3.13rc2", Some(13))]
    #[case("3.", None)]
    #[case("4.0", None)]
    #[case("13.5", None)]
    #[case("", None)]
    fn minor_component_reads_leading_digits(#[case] token: &str, #[case] expected: Option<u32>) {
        assert_eq!(minor_component(token), expected);
    }
}
