use serde::Serialize;

/// A run of text within one block, tagged with its inline style.
///
/// Spans are flat and non-overlapping. Concatenating the span texts in
/// order, with each span's delimiters restored, reconstructs the source
/// text exactly; the stored text itself has the delimiters stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InlineSpan {
    Plain(String),
    Bold(String),
    Italic(String),
    BoldItalic(String),
    Code(String),
}

impl InlineSpan {
    /// The span's text with delimiters stripped.
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::Plain(text)
            | InlineSpan::Bold(text)
            | InlineSpan::Italic(text)
            | InlineSpan::BoldItalic(text)
            | InlineSpan::Code(text) => text,
        }
    }
}
