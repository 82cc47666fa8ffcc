//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant
//! checks.
//!
//! ## Modules
//!
//! - **`normalize`**: converts parsed structures to stable normal forms —
//!   a line-oriented text dump for block fixtures and a serializable span
//!   form for `insta` yaml snapshots
//! - **`invariants`**: runtime checks the fixture harness runs on every
//!   parse (span concatenation identity, no separator rows in table
//!   bodies)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{SpanSnap, normalize_spans, render};
