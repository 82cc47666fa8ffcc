//! # Block Parsing
//!
//! Two-phase block parsing over the `\n`-split lines of a message body.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` containing local facts only (fence marker, pipe-row cells,
//!    heading level, list marker, blank status)
//! 2. **Block Construction** (`builder`): a `BlockBuilder` folds the
//!    classified lines through its leaf state (open fence, open table run)
//!    and emits `Block`s in source order
//!
//! ## Modules
//!
//! - **`types`**: the `Block` sum type
//! - **`kinds`**: block-specific detection with owned delimiter constants
//!   (CodeFence, PipeRow, Heading, ListMarker)
//! - **`classify`**: `classify` produces a `LineKind` per line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - The block sequence preserves source line order
//! - Fenced code blocks are raw zones: lines inside them are buffered
//!   verbatim, never classified as headings/lists/tables
//! - A table is finalized when a non-pipe-row line (or end of input) ends
//!   its run; the dashes separator row is skipped, never stored
//! - An unterminated fence at end of input emits nothing

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, classify};
pub use types::Block;
