use crate::parsing::blocks::Block;
use crate::parsing::inline::InlineSpan;
use crate::parsing::tokenize_block;

/// Runtime checks the fixture harness applies to every parse. Panics on
/// violation; test-harness use only.
pub fn check(blocks: &[Block]) {
    for block in blocks {
        // Concatenating span texts with delimiters restored must rebuild
        // the block text exactly — boundaries never drop or duplicate
        // characters.
        if let Some(text) = block.inline_text() {
            let spans = tokenize_block(block);
            assert!(
                !spans.is_empty(),
                "no spans for text-bearing block {text:?}"
            );
            let rebuilt: String = spans.iter().map(restore_delimiters).collect();
            assert_eq!(rebuilt, text, "span concatenation altered the text");
        }

        // A separator line's raw content contains `---`, so any stored body
        // cell containing it means the skip rule was bypassed.
        if let Block::Table { rows, .. } = block {
            for row in rows {
                assert!(
                    row.iter().all(|cell| !cell.contains("---")),
                    "separator row stored in table body: {row:?}"
                );
            }
        }
    }
}

fn restore_delimiters(span: &InlineSpan) -> String {
    match span {
        InlineSpan::Plain(text) => text.clone(),
        InlineSpan::Bold(text) => format!("**{text}**"),
        InlineSpan::Italic(text) => format!("*{text}*"),
        InlineSpan::BoldItalic(text) => format!("***{text}***"),
        InlineSpan::Code(text) => format!("`{text}`"),
    }
}
