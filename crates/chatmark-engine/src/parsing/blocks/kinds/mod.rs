//! # Block Kinds
//!
//! Block-specific detection helpers that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeFence`**: `MARKER = "```"` plus info-string extraction
//! - **`PipeRow`**: cell splitting and the `---` separator-row convention
//! - **`Heading`**: ATX markers, longest first so `###` is never claimed
//!   by the `##` rule
//! - **`ListMarker`**: bullet (`-`, `*`, `•`) and numbered markers
//!
//! All delimiter constants live here, not scattered in classifier code.

pub mod code_fence;
pub mod heading;
pub mod list_item;
pub mod table;

pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list_item::ListMarker;
pub use table::PipeRow;
