/// ATX heading markers, levels 1-3.
pub struct Heading;

impl Heading {
    /// Checked in this order so `### ` is not claimed by the `## ` rule.
    const MARKERS: [(&'static str, u8); 3] = [("### ", 3), ("## ", 2), ("# ", 1)];

    /// Splits a heading line into (level, remainder). The marker must sit
    /// at the very start of the line; an indented `#` is a paragraph.
    pub fn split(line: &str) -> Option<(u8, &str)> {
        Self::MARKERS
            .iter()
            .find_map(|(marker, level)| line.strip_prefix(marker).map(|rest| (*level, rest)))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("# Top", Some((1, "Top")))]
    #[case("## Mid", Some((2, "Mid")))]
    #[case("### Sub", Some((3, "Sub")))]
    #[case("#### Deep", None)]
    #[case("#NoSpace", None)]
    #[case(" # Indented", None)]
    #[case("Plain", None)]
    fn heading_specificity(#[case] line: &str, #[case] expected: Option<(u8, &str)>) {
        assert_eq!(Heading::split(line), expected);
    }

    #[test]
    fn remainder_is_verbatim() {
        assert_eq!(Heading::split("## spaced out  "), Some((2, "spaced out  ")));
    }
}
