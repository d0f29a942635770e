//! Domain model types (pure).
//!
//! Records, cell values and column descriptors. Nothing here performs I/O.

pub mod column;
pub mod error;
pub mod key_action;
pub mod record;
pub mod value;

// Re-export for convenience
pub use column::{ColumnDescriptor, ColumnError, ColumnSet, RenderFn, RenderedCell};
pub use error::{AppError, InputError};
pub use key_action::KeyAction;
pub use record::{Record, RowKey, ID_FIELD};
pub use value::Value;
