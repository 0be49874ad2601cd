//! # Snapshot Testing Support
//!
//! Utilities for testing the pipeline via inline snapshots and invariant
//! checks.
//!
//! ## Modules
//!
//! - **`dump`**: renders a tree as an indented `Kind@start..end` listing for
//!   `insta` inline snapshots
//! - **`invariants`**: runtime checks for tree correctness (spans in bounds,
//!   raw equals the source slice, children ordered and contained, no gaps
//!   after gap filling)

pub mod dump;
pub mod invariants;

pub use dump::dump;
pub use invariants::check as invariants;
