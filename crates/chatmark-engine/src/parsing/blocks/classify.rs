use super::kinds::{CodeFence, Heading, ListMarker, PipeRow};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently,
/// with no reference to surrounding state. The builder decides what a fact
/// means in context — a fence line closes a block when one is open, a pipe
/// row continues a table run, and so on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// The raw line, whitespace untouched.
    pub raw: &'a str,
    pub kind: LineKind<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Trimmed line starts with three backticks; `info` is the trimmed
    /// remainder (the language tag on an opening fence).
    Fence { info: &'a str },
    /// A pipe-table row and its trimmed, non-empty cells.
    PipeRow {
        cells: Vec<&'a str>,
        separator: bool,
    },
    Heading { level: u8, text: &'a str },
    /// Entire trimmed line is `---` or `***`.
    Rule,
    Bullet { indent: usize, text: &'a str },
    Numbered { text: &'a str },
    Blank,
    /// No other rule claimed the line; becomes a verbatim paragraph.
    Text,
}

/// Classifies one line. The match order is the parser's tie-break order and
/// must not be rearranged: fence, pipe row, heading (longest marker first),
/// rule, bullet, numbered, blank, text.
pub fn classify(line: &str) -> LineClass<'_> {
    let kind = if let Some(info) = CodeFence::info(line) {
        LineKind::Fence { info }
    } else if let Some(cells) = PipeRow::cells(line) {
        LineKind::PipeRow {
            cells,
            separator: PipeRow::is_separator(line),
        }
    } else if let Some((level, text)) = Heading::split(line) {
        LineKind::Heading { level, text }
    } else if matches!(line.trim(), "---" | "***") {
        LineKind::Rule
    } else if let Some((indent, text)) = ListMarker::bullet(line) {
        LineKind::Bullet { indent, text }
    } else if let Some(text) = ListMarker::numbered(line) {
        LineKind::Numbered { text }
    } else if line.trim().is_empty() {
        LineKind::Blank
    } else {
        LineKind::Text
    };

    LineClass { raw: line, kind }
}
