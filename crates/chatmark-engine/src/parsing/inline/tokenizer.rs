use std::sync::OnceLock;

use regex::Regex;

use super::types::InlineSpan;

/// The combined delimiter pattern. Alternatives are tried in this order at
/// each position, so `***x***` is claimed by the bold-italic arm before the
/// single-asterisk arm can split it. Content classes exclude the delimiter
/// character ([^*], [^`]), which keeps a match from running past an
/// adjacent marker.
fn delimiter_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\*\*\*[^*]+\*\*\*|\*\*[^*]+\*\*|\*[^*]+\*|`[^`]+`")
            .expect("invalid delimiter pattern")
    })
}

/// Splits one block's text into styled spans.
///
/// Total over all inputs and never empty: text with no recognized
/// delimiter pair comes back as a single `Plain` span (stray markers
/// included, unprocessed). Scanning is left to right and matches never
/// overlap.
pub fn tokenize(text: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut last = 0;

    for m in delimiter_pattern().find_iter(text) {
        if m.start() > last {
            spans.push(InlineSpan::Plain(text[last..m.start()].to_string()));
        }
        spans.push(styled(m.as_str()));
        last = m.end();
    }

    if last < text.len() {
        spans.push(InlineSpan::Plain(text[last..].to_string()));
    }
    if spans.is_empty() {
        // Only reachable for empty input; the contract still promises one
        // span.
        spans.push(InlineSpan::Plain(text.to_string()));
    }

    spans
}

/// Strips the delimiter pair from a match and tags the inner text.
fn styled(delimited: &str) -> InlineSpan {
    if let Some(inner) = strip_pair(delimited, "***") {
        InlineSpan::BoldItalic(inner.to_string())
    } else if let Some(inner) = strip_pair(delimited, "**") {
        InlineSpan::Bold(inner.to_string())
    } else if let Some(inner) = strip_pair(delimited, "*") {
        InlineSpan::Italic(inner.to_string())
    } else if let Some(inner) = strip_pair(delimited, "`") {
        InlineSpan::Code(inner.to_string())
    } else {
        // Unreachable for anything the pattern produced; degrade to plain
        // rather than panic.
        InlineSpan::Plain(delimited.to_string())
    }
}

fn strip_pair<'a>(delimited: &'a str, delim: &str) -> Option<&'a str> {
    delimited.strip_prefix(delim)?.strip_suffix(delim)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn plain(text: &str) -> InlineSpan {
        InlineSpan::Plain(text.to_string())
    }

    #[test]
    fn plain_text_round_trips_as_one_span() {
        let spans = tokenize("no markup here at all");
        assert_eq!(spans, vec![plain("no markup here at all")]);
    }

    #[test]
    fn empty_input_still_yields_one_span() {
        assert_eq!(tokenize(""), vec![plain("")]);
    }

    #[test]
    fn bold_italic_outranks_the_narrower_arms() {
        assert_eq!(
            tokenize("***x***"),
            vec![InlineSpan::BoldItalic("x".to_string())]
        );
    }

    #[test]
    fn each_variant_tokenizes() {
        assert_eq!(tokenize("**b**"), vec![InlineSpan::Bold("b".to_string())]);
        assert_eq!(tokenize("*i*"), vec![InlineSpan::Italic("i".to_string())]);
        assert_eq!(tokenize("`c`"), vec![InlineSpan::Code("c".to_string())]);
    }

    #[test]
    fn mixed_line_splits_into_ordered_spans() {
        let spans = tokenize("say *hi* to **them** via `dm`");
        assert_eq!(
            spans,
            vec![
                plain("say "),
                InlineSpan::Italic("hi".to_string()),
                plain(" to "),
                InlineSpan::Bold("them".to_string()),
                plain(" via "),
                InlineSpan::Code("dm".to_string()),
            ]
        );
    }

    #[test]
    fn adjacent_matches_leave_no_gap_spans() {
        let spans = tokenize("**a**`b`*c*");
        assert_eq!(
            spans,
            vec![
                InlineSpan::Bold("a".to_string()),
                InlineSpan::Code("b".to_string()),
                InlineSpan::Italic("c".to_string()),
            ]
        );
    }

    #[test]
    fn unpaired_markers_stay_plain() {
        assert_eq!(tokenize("a ** b"), vec![plain("a ** b")]);
        assert_eq!(tokenize("`open"), vec![plain("`open")]);
    }

    #[test]
    fn asterisk_arms_outrank_backticks() {
        // The precedence order puts every asterisk arm before the backtick
        // arm, so backticks inside bold stay literal.
        assert_eq!(
            tokenize("**has `ticks`**"),
            vec![InlineSpan::Bold("has `ticks`".to_string())]
        );
    }

    #[test]
    fn spans_reconstruct_the_input() {
        let input = "a *b* **c** ***d*** `e` f";
        let rebuilt: String = tokenize(input)
            .iter()
            .map(|span| match span {
                InlineSpan::Plain(t) => t.clone(),
                InlineSpan::Bold(t) => format!("**{t}**"),
                InlineSpan::Italic(t) => format!("*{t}*"),
                InlineSpan::BoldItalic(t) => format!("***{t}***"),
                InlineSpan::Code(t) => format!("`{t}`"),
            })
            .collect();
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn retokenizing_a_plain_span_is_stable() {
        let spans = tokenize("one stray * marker");
        let InlineSpan::Plain(text) = &spans[0] else {
            panic!("expected a plain span");
        };
        assert_eq!(tokenize(text), spans);
    }
}
