//! # Message Parsing
//!
//! Two-phase parsing of a raw message body into the document model:
//!
//! 1. **Block parsing** (`blocks`): a single forward pass over the
//!    `\n`-split lines, classifying each line and folding the sequence
//!    through a small state machine (open code fence, open table run).
//! 2. **Inline tokenizing** (`inline`): splits one block's text into flat,
//!    non-overlapping styled spans.
//!
//! Both phases are total: malformed markup degrades into plainer nodes
//! (`Paragraph`, `Blank`, `Plain`) instead of producing errors. That is a
//! deliberate property for untrusted chat content — a parse problem must
//! never keep a message from rendering.

pub mod blocks;
pub mod inline;
pub mod snapshot;

use blocks::{Block, BlockBuilder, classify};
use inline::InlineSpan;

/// Parses a raw message body into its ordered block sequence.
///
/// The empty string parses to an empty sequence; any other input produces
/// one block per source line, except that fenced code and table runs
/// collapse their lines into a single block.
pub fn parse_message(text: &str) -> Vec<Block> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut builder = BlockBuilder::new();
    for line in text.split('\n') {
        builder.push(classify(line));
    }
    builder.finish()
}

/// Inline spans for a text-bearing block (paragraph, list item, heading).
///
/// Blocks whose content is never styled (code, tables, rules, blanks)
/// yield an empty list.
pub fn tokenize_block(block: &Block) -> Vec<InlineSpan> {
    match block.inline_text() {
        Some(text) => inline::tokenize(text),
        None => Vec::new(),
    }
}
