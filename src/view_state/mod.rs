//! Derived view data (pure).
//!
//! Everything here is recomputed from records, columns and query state; it
//! is never mutated in place.

pub mod header;
pub mod projector;

pub use header::{headers, HeaderCell};
pub use projector::{project, TableView, ViewRow};
