//! # Inline Tokenizing
//!
//! Splits one block's text into flat, non-overlapping styled spans.
//!
//! ## Architecture
//!
//! A single combined pattern matches the first applicable delimiter pair at
//! each position, in precedence order: `***…***`, `**…**`, `*…*`, `` `…` ``.
//! Text between matches becomes `Plain` spans. Content classes exclude the
//! delimiter character, which keeps a match from swallowing an adjacent
//! marker — and also means spans never nest (`**bold *inner***` is not two
//! styles; that is a product decision, not a bug to fix here).
//!
//! ## Modules
//!
//! - **`types`**: the `InlineSpan` sum type
//! - **`tokenizer`**: `tokenize()` entry point and the combined pattern
//! - **`normalize`**: opt-in `__`/`_` → `**`/`*` rewriting

pub mod normalize;
pub mod tokenizer;
pub mod types;

pub use normalize::normalize_delimiters;
pub use tokenizer::tokenize;
pub use types::InlineSpan;
