//! tabview
//!
//! Tabular view engine over heterogeneous records: search, per-column
//! filters and single-column sort, projected into display rows. The
//! `tabview` binary drives it from a terminal.
//!
//! Pure core (`model`, `query`, `state`, `view_state`, `engine`) and impure
//! shell (`config`, `logging`, `source`, `view`).

pub mod config;
pub mod engine;
pub mod logging;
pub mod model;
pub mod query;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;

pub use engine::DataTable;
