//! UniFFI bindings for chatmark mobile clients
//!
//! Provides a minimal FFI interface for the Kotlin/Swift apps to parse
//! message bodies with the Rust engine. The app renders blocks natively,
//! so everything crosses the boundary as flat records with a string `kind`
//! discriminant rather than as the engine's enums.

use chatmark_engine::{Block, InlineSpan, parse_message, tokenize, tokenize_block};

uniffi::setup_scaffolding!();

// ============ DTOs ============

/// One parsed block in transport form.
///
/// `kind` discriminates; the remaining fields are meaningful per kind and
/// zeroed otherwise (the app switches on `kind` before reading them).
#[derive(uniffi::Record)]
pub struct BlockDto {
    /// "heading", "paragraph", "list", "code", "table", "rule" or "blank".
    pub kind: String,
    /// Heading level (1-3) when kind is "heading", 0 otherwise.
    pub heading_level: u8,
    /// Text content for heading/paragraph/list/code blocks.
    pub text: String,
    /// Fence info string when kind is "code" (may be empty).
    pub language: String,
    /// Leading-whitespace depth when kind is "list".
    pub indent: u32,
    /// Numbered-versus-bullet flag when kind is "list".
    pub ordered: bool,
    /// Header cells when kind is "table".
    pub headers: Vec<String>,
    /// Body rows when kind is "table".
    pub rows: Vec<RowDto>,
    /// Inline spans for text-bearing blocks, empty otherwise.
    pub spans: Vec<SpanDto>,
}

/// One table body row.
#[derive(uniffi::Record)]
pub struct RowDto {
    pub cells: Vec<String>,
}

/// A styled run of text within one block.
#[derive(uniffi::Record)]
pub struct SpanDto {
    /// "plain", "bold", "italic", "bold_italic" or "code".
    pub kind: String,
    pub text: String,
}

impl BlockDto {
    fn from_engine(block: &Block) -> Self {
        let spans = tokenize_block(block)
            .iter()
            .map(SpanDto::from_engine)
            .collect();

        match block {
            Block::Heading { level, text } => Self {
                kind: "heading".to_string(),
                heading_level: *level,
                text: text.clone(),
                spans,
                ..Self::empty()
            },
            Block::Paragraph { text } => Self {
                kind: "paragraph".to_string(),
                text: text.clone(),
                spans,
                ..Self::empty()
            },
            Block::ListItem {
                text,
                indent,
                ordered,
            } => Self {
                kind: "list".to_string(),
                text: text.clone(),
                indent: *indent as u32,
                ordered: *ordered,
                spans,
                ..Self::empty()
            },
            Block::CodeBlock { language, text } => Self {
                kind: "code".to_string(),
                language: language.clone(),
                text: text.clone(),
                spans,
                ..Self::empty()
            },
            Block::Table { headers, rows } => Self {
                kind: "table".to_string(),
                headers: headers.clone(),
                rows: rows
                    .iter()
                    .map(|cells| RowDto {
                        cells: cells.clone(),
                    })
                    .collect(),
                spans,
                ..Self::empty()
            },
            Block::HorizontalRule => Self {
                kind: "rule".to_string(),
                spans,
                ..Self::empty()
            },
            Block::Blank => Self {
                kind: "blank".to_string(),
                spans,
                ..Self::empty()
            },
        }
    }

    fn empty() -> Self {
        Self {
            kind: String::new(),
            heading_level: 0,
            text: String::new(),
            language: String::new(),
            indent: 0,
            ordered: false,
            headers: Vec::new(),
            rows: Vec::new(),
            spans: Vec::new(),
        }
    }
}

impl SpanDto {
    fn from_engine(span: &InlineSpan) -> Self {
        let kind = match span {
            InlineSpan::Plain(_) => "plain",
            InlineSpan::Bold(_) => "bold",
            InlineSpan::Italic(_) => "italic",
            InlineSpan::BoldItalic(_) => "bold_italic",
            InlineSpan::Code(_) => "code",
        };
        Self {
            kind: kind.to_string(),
            text: span.text().to_string(),
        }
    }
}

// ============ Standalone Functions ============

/// Parse a message body into renderable blocks.
#[uniffi::export]
pub fn parse_blocks(text: String) -> Vec<BlockDto> {
    parse_message(&text).iter().map(BlockDto::from_engine).collect()
}

/// Tokenize a single run of text without block structure (used for
/// one-line previews and notification snippets).
#[uniffi::export]
pub fn tokenize_text(text: String) -> Vec<SpanDto> {
    tokenize(&text).iter().map(SpanDto::from_engine).collect()
}
