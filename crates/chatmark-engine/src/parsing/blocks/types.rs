use serde::Serialize;

/// A top-level structural unit of a parsed message.
///
/// Blocks are pure data: constructed once by the parser, never mutated,
/// ordered exactly as their source lines appear in the message body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    /// An ATX-style heading, levels 1-3 only.
    Heading { level: u8, text: String },
    /// Fallback for any line no other rule claims. The text is kept
    /// verbatim, surrounding whitespace included.
    Paragraph { text: String },
    /// A bullet or numbered list item. `indent` is the count of leading
    /// whitespace characters for bullet items and always 0 for numbered
    /// ones — nesting depth is only tracked for bullets.
    ListItem {
        text: String,
        indent: usize,
        ordered: bool,
    },
    /// A fenced code block: the raw lines between the fences joined with
    /// `\n`, no trailing fence. `language` may be empty.
    CodeBlock { language: String, text: String },
    /// A pipe table: one header row plus zero or more body rows. The
    /// dashes-only separator row is never stored.
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// A `---` or `***` divider line.
    HorizontalRule,
    /// An empty source line, preserved (not collapsed) so the renderer can
    /// reproduce vertical spacing.
    Blank,
}

impl Block {
    /// The text the inline tokenizer applies to, if this block carries any.
    pub fn inline_text(&self) -> Option<&str> {
        match self {
            Block::Heading { text, .. }
            | Block::Paragraph { text }
            | Block::ListItem { text, .. } => Some(text),
            Block::CodeBlock { .. }
            | Block::Table { .. }
            | Block::HorizontalRule
            | Block::Blank => None,
        }
    }
}
