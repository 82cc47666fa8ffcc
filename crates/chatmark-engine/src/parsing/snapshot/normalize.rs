use serde::Serialize;

use crate::parsing::blocks::Block;
use crate::parsing::inline::InlineSpan;
use crate::parsing::tokenize_block;

/// One inline span in test-normal form.
#[derive(Serialize)]
pub struct SpanSnap {
    pub kind: String,
    pub text: String,
}

/// Converts spans into a serializable snapshot for `insta`.
pub fn normalize_spans(spans: &[InlineSpan]) -> Vec<SpanSnap> {
    spans
        .iter()
        .map(|span| SpanSnap {
            kind: span_kind(span).to_string(),
            text: span.text().to_string(),
        })
        .collect()
}

/// Renders parsed blocks as a stable, line-oriented dump for snapshot
/// tests: one line per block, code/table content and inline spans indented
/// beneath it.
pub fn render(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            Block::Heading { level, text } => {
                out.push_str(&format!("heading level={level} {text:?}\n"));
            }
            Block::Paragraph { text } => {
                out.push_str(&format!("paragraph {text:?}\n"));
            }
            Block::ListItem {
                text,
                indent,
                ordered,
            } => {
                out.push_str(&format!("list indent={indent} ordered={ordered} {text:?}\n"));
            }
            Block::CodeBlock { language, text } => {
                out.push_str(&format!("code lang={language:?}\n"));
                if !text.is_empty() {
                    for line in text.split('\n') {
                        if line.is_empty() {
                            out.push_str("  |\n");
                        } else {
                            out.push_str(&format!("  | {line}\n"));
                        }
                    }
                }
            }
            Block::Table { headers, rows } => {
                out.push_str("table\n");
                out.push_str(&row_line("head", headers));
                for row in rows {
                    out.push_str(&row_line("row", row));
                }
            }
            Block::HorizontalRule => out.push_str("rule\n"),
            Block::Blank => out.push_str("blank\n"),
        }

        for span in tokenize_block(block) {
            out.push_str(&format!("  {} {:?}\n", span_kind(&span), span.text()));
        }
    }
    out
}

fn span_kind(span: &InlineSpan) -> &'static str {
    match span {
        InlineSpan::Plain(_) => "plain",
        InlineSpan::Bold(_) => "bold",
        InlineSpan::Italic(_) => "italic",
        InlineSpan::BoldItalic(_) => "bold-italic",
        InlineSpan::Code(_) => "code",
    }
}

fn row_line(label: &str, cells: &[String]) -> String {
    if cells.is_empty() {
        format!("  {label}\n")
    } else {
        format!("  {label} {}\n", cells.join(" | "))
    }
}
